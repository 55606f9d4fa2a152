//! Pin transaction builders shared by the unit tests.
//!
//! Each helper yields exactly the reads and writes the driver performs, so
//! `pin.done()` fails on any extra or missing line access.

use embedded_hal_mock::eh1::digital::{State as MockState, Transaction as PinTx};

pub fn highs(n: usize) -> Vec<PinTx> {
    (0..n).map(|_| PinTx::get(MockState::High)).collect()
}

pub fn lows(n: usize) -> Vec<PinTx> {
    (0..n).map(|_| PinTx::get(MockState::Low)).collect()
}

/// Host pulls the line low, then releases it to the pull-up.
pub fn start_signal() -> Vec<PinTx> {
    vec![PinTx::set(MockState::Low), PinTx::set(MockState::High)]
}

/// `n` high reads after the release, then the low read that opens bit 0.
pub fn release_and_sync(n: usize) -> Vec<PinTx> {
    let mut tx = highs(n);
    tx.extend(lows(1));
    tx
}

/// One bit period sampled as `low` low reads and `high` high reads.
///
/// The first low read belongs to the previous phase and the trailing low read
/// opens the next bit, so the sequence is `low - 1` lows, `high` highs, one low.
pub fn encode_sample(low: usize, high: usize) -> Vec<PinTx> {
    let mut tx = lows(low - 1);
    tx.extend(highs(high));
    tx.extend(lows(1));
    tx
}

/// One bit: 3 low samples, then 5 high samples for a 1 or 2 for a 0.
pub fn encode_bit(bit: bool) -> Vec<PinTx> {
    encode_sample(3, if bit { 5 } else { 2 })
}

/// All 40 bits of `bytes`, MSB first.
pub fn encode_frame(bytes: [u8; 5]) -> Vec<PinTx> {
    bytes
        .iter()
        .flat_map(|byte| (0..8).map(move |i| (byte >> (7 - i)) & 1 == 1))
        .flat_map(encode_bit)
        .collect()
}

/// A complete attempt: start signal, frame, and the line restored to idle high.
pub fn attempt(bytes: [u8; 5]) -> Vec<PinTx> {
    let mut tx = start_signal();
    tx.extend(release_and_sync(2));
    tx.extend(encode_frame(bytes));
    tx.push(PinTx::set(MockState::High));
    tx
}
