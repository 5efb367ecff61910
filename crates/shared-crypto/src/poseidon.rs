//! # Poseidon Compression
//!
//! Fixed 2-to-1 compression function over the scalar field, used for every
//! internal node of the freeze-registry Merkle tree.
//!
//! ## Construction
//!
//! - Width 3 (rate 2, capacity 1), x^5 S-box
//! - 8 full rounds around 57 partial rounds
//! - Round constants and the Cauchy MDS matrix are ground out of SHA-256
//!   under fixed domain tags, so parameter generation is deterministic and
//!   carries no hidden state
//!
//! The output of [`hash_pair`] must match the on-chain verifier's node hash
//! exactly; nothing else in the workspace is allowed to redefine it.

use std::sync::OnceLock;

use sha2::{Digest, Sha256};
use shared_types::{FieldElement, U256};

/// Permutation width: two rate elements plus one capacity element.
const WIDTH: usize = 3;

/// Number of full rounds (split evenly before and after the partial rounds).
const FULL_ROUNDS: usize = 8;

/// Number of partial rounds.
const PARTIAL_ROUNDS: usize = 57;

/// Domain tag for round-constant derivation.
const ROUND_CONSTANT_TAG: &str = "frostline.poseidon.round_constant";

/// Domain tags for the Cauchy MDS matrix inputs.
const MDS_X_TAG: &str = "frostline.poseidon.mds.x";
const MDS_Y_TAG: &str = "frostline.poseidon.mds.y";

/// Domain tag for the capacity initializer of 2-to-1 compression.
const CAPACITY_TAG: &str = "frostline.poseidon.capacity";

/// Derive one field element from a domain tag and an index.
fn derive_element(tag: &str, index: u32) -> FieldElement {
    let mut hasher = Sha256::new();
    hasher.update(tag.as_bytes());
    hasher.update(index.to_be_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&digest);
    FieldElement::from_u256_reduced(U256::from_little_endian(&bytes))
}

/// The Poseidon permutation with its derived parameters.
pub struct Poseidon {
    round_constants: Vec<[FieldElement; WIDTH]>,
    mds: [[FieldElement; WIDTH]; WIDTH],
    capacity_init: FieldElement,
}

impl Poseidon {
    /// Derive the full parameter set from the fixed domain tags.
    fn derive() -> Self {
        let total_rounds = FULL_ROUNDS + PARTIAL_ROUNDS;
        let mut round_constants = Vec::with_capacity(total_rounds);
        for round in 0..total_rounds {
            let mut row = [FieldElement::ZERO; WIDTH];
            for (lane, slot) in row.iter_mut().enumerate() {
                *slot = derive_element(ROUND_CONSTANT_TAG, (round * WIDTH + lane) as u32);
            }
            round_constants.push(row);
        }

        // Cauchy matrix m[i][j] = 1 / (x_i + y_j). With 253-bit derived
        // inputs the sums are nonzero and the entries pairwise distinct, so
        // the matrix is MDS.
        let xs: Vec<FieldElement> = (0..WIDTH as u32).map(|i| derive_element(MDS_X_TAG, i)).collect();
        let ys: Vec<FieldElement> = (0..WIDTH as u32).map(|j| derive_element(MDS_Y_TAG, j)).collect();
        let mut mds = [[FieldElement::ZERO; WIDTH]; WIDTH];
        for (i, x) in xs.iter().enumerate() {
            for (j, y) in ys.iter().enumerate() {
                mds[i][j] = (*x + *y).inverse().unwrap_or(FieldElement::ZERO);
                debug_assert!(!mds[i][j].is_zero());
            }
        }

        Self {
            round_constants,
            mds,
            capacity_init: derive_element(CAPACITY_TAG, 0),
        }
    }

    /// The process-wide parameter set (derivation is pure, so sharing one
    /// copy is only a cost optimization).
    fn shared() -> &'static Poseidon {
        static PARAMS: OnceLock<Poseidon> = OnceLock::new();
        PARAMS.get_or_init(Poseidon::derive)
    }

    /// x^5 S-box.
    fn sbox(x: FieldElement) -> FieldElement {
        let x2 = x * x;
        let x4 = x2 * x2;
        x4 * x
    }

    fn mix(&self, state: &[FieldElement; WIDTH]) -> [FieldElement; WIDTH] {
        let mut out = [FieldElement::ZERO; WIDTH];
        for (i, row) in self.mds.iter().enumerate() {
            let mut acc = FieldElement::ZERO;
            for (j, m) in row.iter().enumerate() {
                acc = acc + (*m * state[j]);
            }
            out[i] = acc;
        }
        out
    }

    fn full_round(&self, state: &mut [FieldElement; WIDTH], round: usize) {
        for (lane, slot) in state.iter_mut().enumerate() {
            *slot = Self::sbox(*slot + self.round_constants[round][lane]);
        }
        *state = self.mix(state);
    }

    fn partial_round(&self, state: &mut [FieldElement; WIDTH], round: usize) {
        for (lane, slot) in state.iter_mut().enumerate() {
            *slot = *slot + self.round_constants[round][lane];
        }
        state[0] = Self::sbox(state[0]);
        *state = self.mix(state);
    }

    /// Run the permutation in place.
    pub fn permute(&self, state: &mut [FieldElement; WIDTH]) {
        let half = FULL_ROUNDS / 2;
        let mut round = 0;
        for _ in 0..half {
            self.full_round(state, round);
            round += 1;
        }
        for _ in 0..PARTIAL_ROUNDS {
            self.partial_round(state, round);
            round += 1;
        }
        for _ in 0..half {
            self.full_round(state, round);
            round += 1;
        }
    }

    /// Compress two field elements into one.
    pub fn compress(&self, left: &FieldElement, right: &FieldElement) -> FieldElement {
        let mut state = [*left, *right, self.capacity_init];
        self.permute(&mut state);
        state[0]
    }
}

/// Hash a Merkle node from its two children.
///
/// This is the compatibility seam with the on-chain verifier: the verifier
/// recomputes exactly this function for every level of a sibling path.
pub fn hash_pair(left: &FieldElement, right: &FieldElement) -> FieldElement {
    Poseidon::shared().compress(left, right)
}
