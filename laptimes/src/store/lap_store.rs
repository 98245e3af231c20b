use crate::handle::{LapHandle, LapTime};

/// Fixed-capacity array of lap slots addressed by `LapHandle`.
///
/// Out-of-range handles are tolerated: `read` yields `EMPTY_LAP_TIME` and
/// `write` does nothing.
pub trait LapStore {
    fn read(&self, handle: LapHandle) -> LapTime;
    fn write(&mut self, handle: LapHandle, time: LapTime);
    fn clear_all(&mut self);
    fn capacity(&self) -> u16;
}

impl<S: LapStore + ?Sized> LapStore for &mut S {
    fn read(&self, handle: LapHandle) -> LapTime {
        (**self).read(handle)
    }

    fn write(&mut self, handle: LapHandle, time: LapTime) {
        (**self).write(handle, time)
    }

    fn clear_all(&mut self) {
        (**self).clear_all()
    }

    fn capacity(&self) -> u16 {
        (**self).capacity()
    }
}

impl<S: LapStore + ?Sized> LapStore for Box<S> {
    fn read(&self, handle: LapHandle) -> LapTime {
        (**self).read(handle)
    }

    fn write(&mut self, handle: LapHandle, time: LapTime) {
        (**self).write(handle, time)
    }

    fn clear_all(&mut self) {
        (**self).clear_all()
    }

    fn capacity(&self) -> u16 {
        (**self).capacity()
    }
}
