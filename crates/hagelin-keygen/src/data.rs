//! Lug selection tables for key list generation.
//!
//! The 6-number sets below reproduce Appendix II of the 1944 technical
//! manual for the converter. Each set lists the per-wheel lug totals; the
//! published overlap column is omitted because it is always
//! `sum(set) - 27`. Group B sets repeat a number and are procedurally
//! limited to roughly one selection in ten.

/// Group A: sets without repeated numbers.
pub(crate) const GROUP_A: [[u8; 6]; 144] = [
    [1, 2, 3, 4, 8, 10],
    [1, 2, 3, 4, 7, 11],
    [1, 2, 3, 4, 6, 12],
    [1, 2, 3, 4, 5, 13],
    [1, 2, 3, 5, 8, 9],
    [1, 2, 3, 5, 7, 10],
    [1, 2, 3, 5, 6, 11],
    [1, 2, 3, 6, 7, 9],
    [1, 2, 4, 5, 7, 9],
    [1, 2, 4, 5, 6, 10],
    [1, 2, 3, 4, 9, 10],
    [1, 2, 3, 4, 8, 11],
    [1, 2, 3, 4, 7, 12],
    [1, 2, 3, 4, 6, 13],
    [1, 2, 3, 5, 8, 10],
    [1, 2, 3, 5, 7, 11],
    [1, 2, 3, 5, 6, 12],
    [1, 2, 3, 6, 8, 9],
    [1, 2, 3, 6, 7, 10],
    [1, 2, 4, 5, 8, 9],
    [1, 2, 4, 5, 7, 10],
    [1, 2, 4, 5, 6, 11],
    [1, 2, 4, 6, 7, 9],
    [1, 2, 3, 4, 9, 11],
    [1, 2, 3, 4, 8, 12],
    [1, 2, 3, 4, 7, 13],
    [1, 2, 3, 5, 9, 10],
    [1, 2, 3, 5, 8, 11],
    [1, 2, 3, 5, 7, 12],
    [1, 2, 3, 5, 6, 13],
    [1, 2, 3, 6, 8, 10],
    [1, 2, 3, 6, 7, 11],
    [1, 2, 3, 7, 8, 9],
    [1, 2, 4, 5, 8, 10],
    [1, 2, 4, 5, 7, 11],
    [1, 2, 4, 5, 6, 12],
    [1, 2, 4, 6, 8, 9],
    [1, 2, 4, 6, 7, 10],
    [1, 2, 3, 4, 10, 11],
    [1, 2, 3, 4, 9, 12],
    [1, 2, 3, 4, 8, 13],
    [1, 2, 3, 5, 9, 11],
    [1, 2, 3, 5, 8, 12],
    [1, 2, 3, 5, 7, 13],
    [1, 2, 3, 6, 9, 10],
    [1, 2, 3, 6, 8, 11],
    [1, 2, 3, 6, 7, 12],
    [1, 2, 3, 7, 8, 10],
    [1, 2, 4, 5, 9, 10],
    [1, 2, 4, 5, 8, 11],
    [1, 2, 4, 5, 7, 12],
    [1, 2, 4, 5, 6, 13],
    [1, 2, 4, 6, 7, 11],
    [1, 2, 4, 6, 8, 10],
    [1, 2, 4, 7, 8, 9],
    [1, 2, 3, 4, 10, 12],
    [1, 2, 3, 4, 9, 13],
    [1, 2, 3, 5, 10, 11],
    [1, 2, 3, 5, 9, 12],
    [1, 2, 3, 5, 8, 13],
    [1, 2, 3, 6, 9, 11],
    [1, 2, 3, 6, 8, 12],
    [1, 2, 3, 6, 7, 13],
    [1, 2, 3, 7, 9, 10],
    [1, 2, 3, 7, 8, 11],
    [1, 2, 4, 5, 9, 11],
    [1, 2, 4, 5, 8, 12],
    [1, 2, 4, 5, 7, 13],
    [1, 2, 4, 6, 9, 10],
    [1, 2, 4, 6, 8, 11],
    [1, 2, 4, 6, 7, 12],
    [1, 2, 4, 7, 8, 10],
    [1, 2, 3, 4, 11, 12],
    [1, 2, 3, 4, 10, 13],
    [1, 2, 3, 5, 10, 12],
    [1, 2, 3, 5, 9, 13],
    [1, 2, 3, 6, 10, 11],
    [1, 2, 3, 6, 9, 12],
    [1, 2, 3, 6, 8, 13],
    [1, 2, 3, 7, 9, 11],
    [1, 2, 3, 7, 8, 12],
    [1, 2, 4, 5, 10, 11],
    [1, 2, 4, 5, 9, 12],
    [1, 2, 4, 5, 8, 13],
    [1, 2, 4, 6, 8, 12],
    [1, 2, 4, 6, 9, 11],
    [1, 2, 4, 6, 7, 13],
    [1, 2, 4, 7, 9, 10],
    [1, 2, 4, 7, 8, 11],
    [1, 2, 3, 4, 11, 13],
    [1, 2, 3, 5, 11, 12],
    [1, 2, 3, 5, 10, 13],
    [1, 2, 3, 6, 10, 12],
    [1, 2, 3, 6, 9, 13],
    [1, 2, 3, 7, 10, 11],
    [1, 2, 3, 7, 9, 12],
    [1, 2, 3, 7, 8, 13],
    [1, 2, 4, 5, 10, 12],
    [1, 2, 4, 5, 9, 13],
    [1, 2, 4, 6, 8, 13],
    [1, 2, 4, 6, 9, 12],
    [1, 2, 4, 6, 10, 11],
    [1, 2, 4, 7, 9, 11],
    [1, 2, 4, 7, 8, 12],
    [1, 2, 4, 8, 9, 10],
    [1, 2, 3, 5, 11, 13],
    [1, 2, 3, 6, 11, 12],
    [1, 2, 3, 6, 10, 13],
    [1, 2, 3, 7, 10, 12],
    [1, 2, 3, 7, 9, 13],
    [1, 2, 4, 5, 11, 12],
    [1, 2, 4, 5, 10, 13],
    [1, 2, 4, 6, 9, 13],
    [1, 2, 4, 6, 10, 12],
    [1, 2, 4, 7, 10, 11],
    [1, 2, 4, 7, 9, 12],
    [1, 2, 4, 7, 8, 13],
    [1, 2, 4, 8, 9, 11],
    [1, 2, 3, 5, 12, 13],
    [1, 2, 3, 6, 11, 13],
    [1, 2, 3, 7, 11, 12],
    [1, 2, 3, 7, 10, 13],
    [1, 2, 4, 5, 11, 13],
    [1, 2, 4, 6, 10, 13],
    [1, 2, 4, 6, 11, 12],
    [1, 2, 4, 7, 10, 12],
    [1, 2, 4, 7, 9, 13],
    [1, 2, 4, 8, 10, 11],
    [1, 2, 4, 8, 9, 12],
    [1, 2, 3, 6, 12, 13],
    [1, 2, 3, 7, 11, 13],
    [1, 2, 4, 5, 12, 13],
    [1, 2, 4, 6, 11, 13],
    [1, 2, 4, 7, 11, 12],
    [1, 2, 4, 7, 10, 13],
    [1, 2, 4, 8, 9, 13],
    [1, 2, 4, 8, 10, 12],
    [1, 2, 3, 7, 12, 13],
    [1, 2, 4, 6, 12, 13],
    [1, 2, 4, 7, 11, 13],
    [1, 2, 4, 8, 11, 12],
    [1, 2, 4, 8, 10, 13],
    [1, 2, 4, 7, 12, 13],
    [1, 2, 4, 8, 11, 13],
];

/// Group B: sets with one repeated number, used for at most ~10% of
/// selections.
pub(crate) const GROUP_B: [[u8; 6]; 204] = [
    [1, 1, 2, 3, 8, 13],
    [1, 1, 2, 4, 9, 11],
    [1, 1, 2, 4, 8, 12],
    [1, 1, 2, 4, 7, 13],
    [1, 1, 2, 5, 9, 10],
    [1, 1, 2, 5, 8, 11],
    [1, 1, 2, 5, 7, 12],
    [1, 1, 2, 5, 6, 13],
    [1, 1, 3, 4, 9, 10],
    [1, 1, 3, 4, 8, 11],
    [1, 1, 3, 4, 7, 12],
    [1, 1, 3, 4, 6, 13],
    [1, 1, 3, 5, 8, 10],
    [1, 1, 3, 5, 7, 11],
    [1, 1, 3, 5, 6, 12],
    [1, 1, 3, 6, 8, 9],
    [1, 1, 3, 6, 7, 10],
    [1, 2, 2, 3, 9, 11],
    [1, 2, 2, 3, 8, 12],
    [1, 2, 2, 3, 7, 13],
    [1, 2, 2, 4, 8, 11],
    [1, 2, 2, 4, 7, 12],
    [1, 2, 2, 4, 6, 13],
    [1, 2, 2, 5, 8, 10],
    [1, 2, 2, 5, 7, 11],
    [1, 2, 2, 5, 6, 12],
    [1, 2, 2, 6, 8, 9],
    [1, 2, 2, 6, 7, 10],
    [1, 2, 3, 3, 9, 10],
    [1, 2, 3, 3, 8, 11],
    [1, 2, 3, 3, 7, 12],
    [1, 2, 3, 4, 9, 9],
    [1, 2, 3, 5, 5, 12],
    [1, 2, 3, 6, 6, 10],
    [1, 2, 4, 4, 8, 9],
    [1, 2, 4, 5, 5, 11],
    [1, 2, 4, 6, 6, 9],
    [1, 1, 2, 4, 9, 12],
    [1, 1, 2, 4, 8, 13],
    [1, 1, 2, 5, 9, 11],
    [1, 1, 2, 5, 8, 12],
    [1, 1, 2, 5, 7, 13],
    [1, 1, 3, 4, 9, 11],
    [1, 1, 3, 4, 8, 12],
    [1, 1, 3, 4, 7, 13],
    [1, 1, 3, 5, 9, 10],
    [1, 1, 3, 5, 8, 11],
    [1, 1, 3, 5, 7, 12],
    [1, 1, 3, 5, 6, 13],
    [1, 1, 3, 6, 8, 10],
    [1, 1, 3, 6, 7, 11],
    [1, 2, 2, 3, 9, 12],
    [1, 2, 2, 3, 8, 13],
    [1, 2, 2, 4, 9, 11],
    [1, 2, 2, 4, 7, 13],
    [1, 2, 2, 5, 9, 10],
    [1, 2, 2, 5, 8, 11],
    [1, 2, 2, 5, 7, 12],
    [1, 2, 2, 5, 6, 13],
    [1, 2, 2, 6, 8, 10], // manual prints 1 2 2 6 10 11 with overlap 2; kept as transcribed
    [1, 2, 2, 6, 7, 11],
    [1, 2, 3, 3, 9, 11],
    [1, 2, 3, 3, 8, 12],
    [1, 2, 3, 3, 7, 13],
    [1, 2, 3, 5, 5, 13],
    [1, 2, 3, 5, 9, 9],
    [1, 2, 3, 6, 6, 11],
    [1, 2, 3, 7, 7, 9],
    [1, 2, 4, 4, 7, 11],
    [1, 2, 4, 4, 5, 13],
    [1, 2, 4, 5, 5, 12],
    [1, 1, 2, 4, 9, 13],
    [1, 1, 2, 5, 10, 11],
    [1, 1, 2, 5, 9, 12],
    [1, 1, 2, 5, 8, 13],
    [1, 1, 3, 4, 10, 11],
    [1, 1, 3, 4, 9, 12],
    [1, 1, 3, 4, 8, 13],
    [1, 1, 3, 5, 9, 11],
    [1, 1, 3, 5, 8, 12],
    [1, 1, 3, 5, 7, 13],
    [1, 1, 3, 6, 9, 10],
    [1, 1, 3, 6, 8, 11],
    [1, 1, 3, 6, 7, 12],
    [1, 2, 2, 3, 9, 13],
    [1, 2, 2, 4, 10, 11],
    [1, 2, 2, 4, 9, 12],
    [1, 2, 2, 4, 8, 13],
    [1, 2, 2, 5, 9, 11],
    [1, 2, 2, 5, 8, 12],
    [1, 2, 2, 5, 7, 13],
    [1, 2, 2, 6, 9, 10],
    [1, 2, 2, 6, 8, 11],
    [1, 2, 2, 6, 7, 12],
    [1, 2, 3, 3, 10, 11],
    [1, 2, 3, 3, 9, 12],
    [1, 2, 3, 3, 8, 13],
    [1, 2, 3, 4, 10, 10],
    [1, 2, 3, 6, 6, 12],
    [1, 2, 3, 6, 9, 9],
    [1, 2, 3, 7, 7, 10],
    [1, 2, 4, 4, 9, 10],
    [1, 2, 4, 4, 8, 11],
    [1, 2, 4, 4, 7, 12],
    [1, 2, 4, 4, 6, 13],
    [1, 2, 4, 5, 5, 13],
    [1, 2, 4, 5, 9, 9],
    [1, 2, 4, 6, 6, 11],
    [1, 2, 4, 7, 7, 9],
    [1, 1, 2, 5, 10, 12],
    [1, 1, 2, 5, 9, 13],
    [1, 1, 3, 4, 10, 12],
    [1, 1, 3, 4, 9, 13],
    [1, 1, 3, 5, 10, 11],
    [1, 1, 3, 5, 9, 12],
    [1, 1, 3, 5, 8, 13],
    [1, 1, 3, 6, 9, 11],
    [1, 1, 3, 6, 8, 12],
    [1, 1, 3, 6, 7, 13],
    [1, 2, 2, 4, 9, 13],
    [1, 2, 2, 5, 10, 11],
    [1, 2, 2, 5, 9, 12],
    [1, 2, 2, 5, 8, 13],
    [1, 2, 2, 6, 9, 11],
    [1, 2, 2, 6, 7, 13],
    [1, 2, 3, 3, 10, 12],
    [1, 2, 3, 3, 9, 13],
    [1, 2, 3, 5, 10, 10],
    [1, 2, 3, 6, 6, 13],
    [1, 2, 3, 7, 7, 11],
    [1, 2, 3, 7, 9, 9],
    [1, 2, 4, 4, 9, 11],
    [1, 2, 4, 4, 7, 13],
    [1, 2, 4, 6, 9, 9],
    [1, 2, 4, 7, 7, 10],
    [1, 1, 2, 5, 10, 13],
    [1, 1, 3, 4, 10, 13],
    [1, 1, 3, 5, 10, 12],
    [1, 1, 3, 5, 9, 13],
    [1, 1, 3, 6, 10, 11],
    [1, 1, 3, 6, 9, 12],
    [1, 1, 3, 6, 8, 13],
    [1, 2, 2, 4, 10, 13],
    [1, 2, 2, 5, 10, 12],
    [1, 2, 2, 5, 9, 13],
    [1, 2, 2, 6, 9, 12],
    [1, 2, 2, 6, 8, 13],
    [1, 2, 3, 3, 10, 13],
    [1, 2, 3, 4, 11, 11],
    [1, 2, 3, 6, 10, 10],
    [1, 2, 3, 7, 7, 12],
    [1, 2, 4, 4, 10, 11],
    [1, 2, 4, 4, 9, 12],
    [1, 2, 4, 4, 8, 13],
    [1, 2, 4, 6, 6, 13],
    [1, 2, 4, 7, 7, 11],
    [1, 2, 4, 7, 9, 9],
    [1, 2, 4, 8, 8, 9],
    [1, 1, 3, 5, 11, 12],
    [1, 1, 3, 5, 10, 13],
    [1, 1, 3, 6, 10, 12],
    [1, 1, 3, 6, 9, 13],
    [1, 2, 2, 4, 11, 13],
    [1, 2, 2, 5, 11, 12],
    [1, 2, 2, 5, 10, 13],
    [1, 2, 2, 6, 9, 13],
    [1, 2, 3, 3, 11, 13],
    [1, 2, 3, 5, 11, 11],
    [1, 2, 3, 7, 7, 13],
    [1, 2, 3, 7, 10, 10],
    [1, 2, 4, 7, 7, 12],
    [1, 2, 4, 8, 9, 9],
    [1, 1, 3, 5, 11, 13],
    [1, 1, 3, 6, 11, 12],
    [1, 1, 3, 6, 10, 13],
    [1, 2, 2, 4, 12, 13],
    [1, 2, 2, 5, 11, 13],
    [1, 2, 2, 6, 11, 12],
    [1, 2, 2, 6, 10, 13],
    [1, 2, 3, 6, 11, 11],
    [1, 2, 4, 4, 11, 12],
    [1, 2, 4, 4, 10, 13],
    [1, 2, 4, 5, 11, 11],
    [1, 2, 4, 7, 7, 13],
    [1, 2, 4, 7, 10, 10],
    [1, 2, 4, 8, 8, 11],
    [1, 1, 3, 6, 11, 13],
    [1, 2, 2, 6, 11, 13],
    [1, 2, 3, 5, 12, 12],
    [1, 2, 4, 4, 11, 13],
    [1, 2, 4, 6, 11, 11],
    [1, 1, 3, 6, 12, 13],
    [1, 2, 2, 6, 12, 13],
    [1, 2, 3, 6, 12, 12],
    [1, 2, 4, 4, 12, 13],
    [1, 2, 4, 5, 12, 12],
    [1, 2, 4, 7, 11, 11],
    [1, 2, 4, 8, 8, 13],
    [1, 2, 2, 6, 13, 13],
    [1, 2, 3, 5, 13, 13],
    [1, 2, 4, 8, 11, 11],
    [1, 2, 3, 6, 13, 13],
    [1, 2, 4, 7, 12, 12],
    [1, 2, 3, 7, 13, 13],
];
