use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::LapStoreError;
use crate::handle::{EMPTY_LAP_TIME, LapHandle, LapTime};
use crate::store::lap_store::LapStore;

pub const SLOT_BYTES: usize = 2;

/// Lap store over a byte-addressable image, the layout an EEPROM or any
/// other persistent memory would hold: slot `i` is a little-endian `u16` at
/// byte offset `i * 2`, with no header.
#[derive(Clone, Debug)]
pub struct ImageLapStore {
    buf: BytesMut,
}

impl ImageLapStore {
    pub fn new(capacity: u16) -> Result<Self, LapStoreError> {
        if capacity == 0 {
            return Err(LapStoreError::ZeroCapacity);
        }
        Ok(Self {
            buf: BytesMut::zeroed(capacity as usize * SLOT_BYTES),
        })
    }

    pub fn from_image(image: &[u8]) -> Result<Self, LapStoreError> {
        let len = image.len();
        if len == 0 || len % SLOT_BYTES != 0 || len / SLOT_BYTES > u16::MAX as usize {
            return Err(LapStoreError::ImageLength(len));
        }
        Ok(Self {
            buf: BytesMut::from(image),
        })
    }

    pub fn image(&self) -> Bytes {
        self.buf.clone().freeze()
    }

    fn offset(&self, handle: LapHandle) -> Option<usize> {
        let off = handle.index() * SLOT_BYTES;
        (off + SLOT_BYTES <= self.buf.len()).then_some(off)
    }
}

impl LapStore for ImageLapStore {
    fn read(&self, handle: LapHandle) -> LapTime {
        match self.offset(handle) {
            Some(off) => (&self.buf[off..off + SLOT_BYTES]).get_u16_le(),
            None => EMPTY_LAP_TIME,
        }
    }

    fn write(&mut self, handle: LapHandle, time: LapTime) {
        match self.offset(handle) {
            Some(off) => self.buf[off..off + SLOT_BYTES].copy_from_slice(&time.to_le_bytes()),
            None => tracing::warn!(?handle, "ignoring write past end of lap image"),
        }
    }

    fn clear_all(&mut self) {
        self.buf.fill(0);
    }

    fn capacity(&self) -> u16 {
        (self.buf.len() / SLOT_BYTES) as u16
    }
}

/// Serialises any store into the flat image layout used by `ImageLapStore`.
pub fn encode_image<S: LapStore + ?Sized>(store: &S) -> Bytes {
    let capacity = store.capacity();
    let mut out = BytesMut::with_capacity(capacity as usize * SLOT_BYTES);
    for i in 0..capacity {
        out.put_u16_le(store.read(LapHandle(i)));
    }
    out.freeze()
}
