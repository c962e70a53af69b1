//! A bloom filter for approximate set membership of sequences and k-mers.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// The FNV-1a 64-bit offset basis.
const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;

/// The FNV-1a 64-bit prime.
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Seeded 64-bit FNV-1a over the bytes, finished with the MurmurHash3 `fmix64`
/// mixer so that the low bits depend on every input byte.
///
/// The function is fixed here rather than taken from the standard library, so
/// it gives the same value on every platform and toolchain.
#[must_use]
pub fn seeded_hash(seed: u64, bytes: &[u8]) -> u64 {
    let mut h = bytes
        .iter()
        .fold(FNV_OFFSET ^ seed, |h, &b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME));

    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^ (h >> 33)
}

/// A fixed-size table of bits indexed by `k` independently seeded hash
/// functions over the bytes of each item.
///
/// An item is reported as present if all `k` of its slots are set. There are
/// no false negatives, but there may be false positives.
///
/// The seeds of the hash functions are stored in the filter, so a filter
/// that is serialized and loaded again, on any platform, reports exactly what
/// the original did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloomFilter {
    /// The table of bits.
    bits: Vec<bool>,
    /// One seed per hash function.
    seeds: Vec<u64>,
}

impl BloomFilter {
    /// Creates an empty filter.
    ///
    /// # Arguments
    ///
    /// * `size` - The number of slots in the table.
    /// * `num_hashes` - The number of hash functions.
    /// * `seed` - The seed from which the hash functions are drawn.
    ///
    /// # Errors
    ///
    /// If `size` or `num_hashes` is zero.
    pub fn new(size: usize, num_hashes: usize, seed: u64) -> Result<Self, String> {
        if size == 0 {
            return Err("A bloom filter needs at least one slot".to_string());
        }
        if num_hashes == 0 {
            return Err("A bloom filter needs at least one hash function".to_string());
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let seeds = (0..num_hashes).map(|_| rng.gen()).collect();

        Ok(Self {
            bits: vec![false; size],
            seeds,
        })
    }

    /// The number of slots in the table.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bits.len()
    }

    /// The number of hash functions.
    #[must_use]
    pub fn num_hashes(&self) -> usize {
        self.seeds.len()
    }

    /// The slots of an item, one per hash function.
    fn slots<'a>(&'a self, item: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
        let size = self.bits.len() as u64;
        self.seeds.iter().map(move |&seed| {
            // The remainder is smaller than `size`, which is a `usize`.
            #[allow(clippy::cast_possible_truncation)]
            let slot = (seeded_hash(seed, item) % size) as usize;
            slot
        })
    }

    /// Adds an item to the filter.
    pub fn insert<T: AsRef<[u8]> + ?Sized>(&mut self, item: &T) {
        let slots = self.slots(item.as_ref()).collect::<Vec<_>>();
        for slot in slots {
            self.bits[slot] = true;
        }
    }

    /// Whether the item may have been added to the filter.
    #[must_use]
    pub fn contains<T: AsRef<[u8]> + ?Sized>(&self, item: &T) -> bool {
        self.slots(item.as_ref()).all(|slot| self.bits[slot])
    }

    /// Adds every k-mer of a sequence to the filter.
    ///
    /// Sequences shorter than `k` have no k-mers and leave the filter
    /// unchanged.
    pub fn insert_kmers(&mut self, sequence: &[u8], k: usize) {
        if k == 0 {
            return;
        }
        for kmer in sequence.windows(k) {
            self.insert(kmer);
        }
    }

    /// For every k-mer of a sequence, in order, whether it may be in the
    /// filter.
    #[must_use]
    pub fn kmer_hits(&self, sequence: &[u8], k: usize) -> Vec<bool> {
        if k == 0 {
            return Vec::new();
        }
        sequence.windows(k).map(|kmer| self.contains(kmer)).collect()
    }

    /// The number of set slots.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// The expected false positive rate after `num_items` distinct items
    /// have been added, i.e. `(1 - e^(-k n / m))^k`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn false_positive_rate(&self, num_items: usize) -> f64 {
        let k = self.seeds.len() as f64;
        let m = self.bits.len() as f64;
        let n = num_items as f64;
        (1.0 - (-k * n / m).exp()).powf(k)
    }

    /// Removes every item from the filter.
    pub fn clear(&mut self) {
        self.bits.iter_mut().for_each(|b| *b = false);
    }
}
