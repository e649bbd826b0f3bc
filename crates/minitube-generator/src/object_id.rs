use crate::clock::{Clock, SystemClock};
use crate::Generator;
use minitube_core::VideoId;
use std::fmt;
use std::fmt::Write;
use std::sync::atomic::{AtomicU32, Ordering};
use uuid::Uuid;

const COUNTER_MASK: u32 = 0x00FF_FFFF;

/// A 12-byte identifier laid out as
/// `[4-byte seconds timestamp][5-byte process-unique][3-byte counter]`,
/// all big-endian, rendered as 24 lowercase hex characters.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    pub fn bytes(&self) -> [u8; 12] {
        self.0
    }

    /// Seconds since the Unix epoch at which the id was minted.
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    pub fn counter(&self) -> u32 {
        u32::from_be_bytes([0, self.0[9], self.0[10], self.0[11]])
    }

    pub fn to_hex(&self) -> String {
        self.0.iter().fold(String::with_capacity(24), |mut out, b| {
            let _ = write!(out, "{b:02x}");
            out
        })
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectId").field(&self.to_hex()).finish()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<ObjectId> for VideoId {
    fn from(value: ObjectId) -> Self {
        VideoId::new_unchecked(value.to_hex())
    }
}

/// Mints [`ObjectId`]s.
///
/// The process-unique bytes and the counter's starting point are drawn at
/// random once per generator, so independent generators (separate
/// processes, or a restart) do not collide. Within one generator the 24-bit
/// counter makes ids unique for up to 16 777 216 ids per second.
pub struct ObjectIdGenerator<C: Clock = SystemClock> {
    process_unique: [u8; 5],
    counter: AtomicU32,
    clock: C,
}

impl ObjectIdGenerator<SystemClock> {
    /// Creates a generator backed by the real system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ObjectIdGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ObjectIdGenerator<C> {
    pub fn with_clock(clock: C) -> Self {
        let seed = Uuid::new_v4().into_bytes();
        let process_unique = [seed[0], seed[1], seed[2], seed[3], seed[4]];
        let counter_start = u32::from_be_bytes([0, seed[10], seed[11], seed[12]]);
        Self::with_parts(clock, process_unique, counter_start)
    }

    fn with_parts(clock: C, process_unique: [u8; 5], counter_start: u32) -> Self {
        Self {
            process_unique,
            counter: AtomicU32::new(counter_start & COUNTER_MASK),
            clock,
        }
    }

    /// Generates the next id.
    pub fn next_id(&self) -> ObjectId {
        // Seconds wrap after 2106; the counter keeps ids distinct regardless.
        let seconds = self.clock.now().as_second() as u32;
        let count = self.counter.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;

        let mut bytes = [0_u8; 12];
        bytes[0..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(&self.process_unique);
        bytes[9..12].copy_from_slice(&count.to_be_bytes()[1..]);
        ObjectId(bytes)
    }
}

impl<C: Clock + 'static> Generator for ObjectIdGenerator<C> {
    type Output = ObjectId;

    fn generate(&self) -> Self::Output {
        self.next_id()
    }
}
