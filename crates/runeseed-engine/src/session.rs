//! The engine context owned by one running game session.

use runeseed_core::clock::Clock;
use runeseed_core::entropy::EntropySource;
use runeseed_core::error::SeedParseError;
use runeseed_core::rng::DeterministicRng;
use tracing::{info, instrument, warn};

use crate::display::DisplayStream;
use crate::distributions;
use crate::entropy::collect_entropy;
use crate::sampler::draw_from_slice;
use crate::seed::{SeedSlice, SeedStore, decode, encode, expand};
use crate::stream::Stream;

/// Every stream of one game session.
///
/// Owns the persisted [`SeedStore`] and the process-local
/// [`DisplayStream`]. Persist [`RngSession::seed_store`] with the game state
/// and hand it back to [`RngSession::resume`] on load.
#[derive(Debug, Clone)]
pub struct RngSession {
    store: SeedStore,
    display: DisplayStream,
}

impl RngSession {
    /// A session expanded from `master`.
    #[must_use]
    pub fn from_seed(master: SeedSlice) -> Self {
        Self::resume(expand(master))
    }

    /// A session expanded from a portable seed string.
    ///
    /// # Errors
    ///
    /// Returns `SeedParseError` if `s` is not a valid seed string.
    pub fn from_seed_string(s: &str) -> Result<Self, SeedParseError> {
        decode(s).map(Self::from_seed)
    }

    /// A session born from fresh entropy.
    #[must_use]
    pub fn from_entropy(source: &mut dyn EntropySource, clock: &dyn Clock) -> Self {
        let mut session = Self::from_seed(SeedSlice::ZERO);
        session.reseed_from_entropy(source, clock);
        session
    }

    /// Continues a session from a persisted store. The display stream
    /// restarts from its default seed.
    #[must_use]
    pub fn resume(store: SeedStore) -> Self {
        Self {
            store,
            display: DisplayStream::new(),
        }
    }

    /// Uniform integer in `[0, bound)` from `stream`, advancing only that
    /// stream.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is not positive or `stream` is [`Stream::Master`].
    pub fn draw(&mut self, stream: Stream, bound: i32) -> i32 {
        match stream {
            Stream::Master => {
                panic!("the master seed records the birth seed and cannot be sampled")
            }
            Stream::Display => self.display.draw(bound),
            Stream::Main | Stream::Event(_) | Stream::Level(_) => {
                let slot = stream
                    .persisted_slot()
                    .unwrap_or_else(|| unreachable!("{stream} is persisted"));
                draw_from_slice(self.store.slot_mut(slot), bound)
            }
        }
    }

    /// A [`DeterministicRng`] view of one stream, for the distributions
    /// and for callers written against the trait.
    ///
    /// # Panics
    ///
    /// Panics if `stream` is [`Stream::Master`].
    pub fn on(&mut self, stream: Stream) -> StreamRng<'_> {
        assert!(
            stream != Stream::Master,
            "the master seed records the birth seed and cannot be sampled"
        );
        StreamRng {
            session: self,
            stream,
        }
    }

    // --- main-stream conveniences ---

    /// [`distributions::uniform0`] on the main stream.
    pub fn uniform0(&mut self, x: i32) -> i32 {
        distributions::uniform0(&mut self.on(Stream::Main), x)
    }

    /// [`distributions::uniform1`] on the main stream.
    pub fn uniform1(&mut self, x: i32) -> i32 {
        distributions::uniform1(&mut self.on(Stream::Main), x)
    }

    /// [`distributions::dice_sum`] on the main stream.
    pub fn dice_sum(&mut self, n: i32, x: i32) -> i32 {
        distributions::dice_sum(&mut self.on(Stream::Main), n, x)
    }

    /// [`distributions::geometric_count`] on the main stream.
    pub fn geometric_count(&mut self, x: i32) -> i32 {
        distributions::geometric_count(&mut self.on(Stream::Main), x)
    }

    /// [`distributions::skewed_scale`] on the main stream.
    pub fn skewed_scale(&mut self, i: i32) -> i32 {
        distributions::skewed_scale(&mut self.on(Stream::Main), i)
    }

    /// [`distributions::luck_adjusted`] on the main stream.
    pub fn luck_adjusted(&mut self, x: i32, luck: i32) -> i32 {
        distributions::luck_adjusted(&mut self.on(Stream::Main), x, luck)
    }

    /// Uniform integer in `[0, x)` from the display stream.
    pub fn display_uniform0(&mut self, x: i32) -> i32 {
        self.draw(Stream::Display, x)
    }

    // --- seeding ---

    /// Replaces every persisted stream with an expansion of `master`.
    pub fn reseed(&mut self, master: SeedSlice) {
        self.store = expand(master);
    }

    /// Reseeds from `source` and `clock`. A degraded collection is logged,
    /// not refused.
    #[instrument(skip(self, source, clock))]
    pub fn reseed_from_entropy(&mut self, source: &mut dyn EntropySource, clock: &dyn Clock) {
        let entropy = collect_entropy(source, clock);
        if entropy.degraded {
            warn!("seeding from the clock alone; this seed is predictable");
        }
        self.reseed(entropy.seed);
        info!(seed = %entropy.seed, "reseeded from entropy");
    }

    /// Reseeds from a portable seed string. The session is untouched on
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `SeedParseError` if `s` is not a valid seed string.
    #[instrument(skip(self))]
    pub fn reseed_from_string(&mut self, s: &str) -> Result<(), SeedParseError> {
        let master = decode(s)?;
        self.reseed(master);
        info!(seed = %master, "reseeded from seed string");
        Ok(())
    }

    /// The portable string of the seed this session was born from.
    #[must_use]
    pub fn export_seed_string(&self) -> String {
        encode(&self.store.master())
    }

    // --- inspection and persistence ---

    /// The seed this session was born from.
    #[must_use]
    pub fn master_seed(&self) -> SeedSlice {
        self.store.master()
    }

    /// Current seed of `stream`. The display stream reports its
    /// process-local position.
    #[must_use]
    pub fn slice(&self, stream: Stream) -> SeedSlice {
        match stream {
            Stream::Display => self.display.slice(),
            _ => self
                .store
                .get(stream)
                .unwrap_or_else(|| unreachable!("{stream} is persisted")),
        }
    }

    /// The persisted part of the session.
    #[must_use]
    pub fn seed_store(&self) -> &SeedStore {
        &self.store
    }

    /// Consumes the session, returning its persisted part.
    #[must_use]
    pub fn into_seed_store(self) -> SeedStore {
        self.store
    }
}

/// One stream of a session, seen through [`DeterministicRng`].
#[derive(Debug)]
pub struct StreamRng<'a> {
    session: &'a mut RngSession,
    stream: Stream,
}

impl StreamRng<'_> {
    /// The stream this view draws from.
    #[must_use]
    pub fn stream(&self) -> Stream {
        self.stream
    }
}

impl DeterministicRng for StreamRng<'_> {
    fn below(&mut self, bound: i32) -> i32 {
        self.session.draw(self.stream, bound)
    }
}
