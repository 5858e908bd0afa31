//! Deterministic skill-level bar widths.
//!
//! The upstream page drew each technology's proficiency bar from a random
//! 70-100% range, which made the value untestable and unstable between
//! renders. Redesigned as a pure function of the technology name: an
//! FNV-1a hash folded into the same 70..=100 band, so the bar is
//! decorative but reproducible.

// =============================================================================
// FNV-1a
// =============================================================================

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    for &byte in bytes {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

// =============================================================================
// Level
// =============================================================================

/// Bar width percentage for a technology, always in 70..=100.
pub fn skill_level(name: &str) -> u8 {
    70 + (fnv1a(name.as_bytes()) % 31) as u8
}

// =============================================================================
// Tests
// =============================================================================
