use laptimes::store::encode_image;
use laptimes::time::{Precision, convert_millis_to_lap_time, format_time};
use laptimes::{
    EMPTY_LAP_TIME, ImageLapStore, LapHandle, LapStore, LapTime, LapTimes, MemoryLapStore, Totals,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn count_runs(slots: &[LapTime]) -> u16 {
    let mut runs = 0;
    let mut prev = EMPTY_LAP_TIME;
    for &slot in slots {
        if slot != EMPTY_LAP_TIME && prev == EMPTY_LAP_TIME {
            runs += 1;
        }
        prev = slot;
    }
    runs
}

fn slots<S: LapStore>(lt: &LapTimes<S>) -> Vec<LapTime> {
    (0..lt.capacity()).map(|i| lt.lap_time(LapHandle(i))).collect()
}

#[test]
fn race_day_workflow() -> anyhow::Result<()> {
    let mut lt = LapTimes::new(MemoryLapStore::new(20)?);

    let mut next = lt.create_new_session();
    for millis in [61_230, 59_870, 60_010] {
        next = lt.add_lap_time(next.unwrap(), convert_millis_to_lap_time(millis));
    }
    let mut next = lt.create_new_session();
    for millis in [58_000, 57_500] {
        next = lt.add_lap_time(next.unwrap(), convert_millis_to_lap_time(millis));
    }

    assert_eq!(
        lt.totals(),
        Totals {
            sessions: 2,
            laps_recorded: 5,
            laps_remaining: 15
        }
    );

    let report: Vec<String> = lt
        .sessions()
        .map(|(_, s)| {
            format!(
                "{} laps, best {}, avg {}",
                s.lap_count,
                format_time(s.best, Precision::Hundredths),
                format_time(s.average, Precision::Seconds)
            )
        })
        .collect();
    assert_eq!(
        report,
        vec![
            "3 laps, best 0:59:87, avg 1:00".to_string(),
            "2 laps, best 0:57:50, avg 0:57".to_string(),
        ]
    );

    let second = lt.session_handle(1).unwrap();
    let last = lt.move_next(second).unwrap();
    assert_eq!(lt.move_next(last), None);
    assert_eq!(lt.move_previous(last), Some(second));
    assert_eq!(lt.move_previous(second), None);

    Ok(())
}

#[test]
fn totals_stay_consistent_under_random_use() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(0x1a9_7135);

    for _ in 0..200 {
        let capacity = rng.random_range(1..=40u16);
        let mut lt = LapTimes::new(MemoryLapStore::new(capacity)?);

        for _ in 0..rng.random_range(0..12) {
            if rng.random_bool(0.05) {
                lt.clear_all();
            }
            let Some(mut handle) = lt.create_new_session() else {
                break;
            };
            for _ in 0..rng.random_range(0..6) {
                let lap = rng.random_range(1..=u16::MAX);
                match lt.add_lap_time(handle, lap) {
                    Some(next) => handle = next,
                    None => break,
                }
            }

            let totals = lt.totals();
            assert_eq!(totals.laps_recorded + totals.laps_remaining, capacity);
            assert_eq!(totals.sessions, count_runs(&slots(&lt)));
            assert_eq!(lt.sessions().count() as u16, totals.sessions);
            assert_eq!(
                lt.sessions().map(|(_, s)| s.lap_count).sum::<u16>(),
                totals.laps_recorded
            );
        }
    }

    Ok(())
}

#[test]
fn image_survives_reopen() -> anyhow::Result<()> {
    let mut lt = LapTimes::new(MemoryLapStore::new(10)?);
    let start = lt.create_new_session().unwrap();
    let next = lt.add_lap_time(start, 300).unwrap();
    lt.add_lap_time(next, 250);

    let image = encode_image(lt.store());
    assert_eq!(image.len(), 20);
    assert_eq!(&image[0..4], &[0x2C, 0x01, 0xFA, 0x00]);

    let reopened = LapTimes::new(ImageLapStore::from_image(&image)?);
    assert_eq!(reopened.totals(), lt.totals());
    assert_eq!(
        reopened.session_summary(LapHandle(0)),
        lt.session_summary(LapHandle(0))
    );
    Ok(())
}

#[test]
fn invalid_handle_raw_round_trip() {
    let lt = LapTimes::new(MemoryLapStore::new(4).unwrap());
    assert_eq!(LapHandle::into_raw(lt.session_handle(0)), 0xFFFF);
    assert_eq!(LapHandle::into_raw(lt.create_new_session()), 0);
}
