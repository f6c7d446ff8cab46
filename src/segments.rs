use crate::DIGIT_COUNT;

/// Decimal point bit. Like the segments it is lit when cleared.
pub const DECIMAL_POINT: u8 = 0x80;

/// Segment patterns for 0-9 on a common-anode display (0 = segment on).
///
/// Bit order is DP,G,F,E,D,C,B,A from the MSB down.
pub const DIGIT_PATTERN: [u8; 10] = [
    !0x3F, // 0: A B C D E F
    !0x06, // 1: B C
    !0x5B, // 2: A B D E G
    !0x4F, // 3: A B C D G
    !0x66, // 4: B C F G
    !0x6D, // 5: A C D F G
    !0x7D, // 6: A C D E F G
    !0x07, // 7: A B C
    !0x7F, // 8: all
    !0x6F, // 9: A B C D F G
];

/// Digit-select byte for each slot, left to right.
pub const DIGIT_POSITION: [u8; DIGIT_COUNT] = [0x01, 0x02, 0x04, 0x08];

/// Splits `number` into thousands, hundreds, tens and units.
///
/// Anything above 9999 keeps only its low four digits.
pub fn digits(number: u16) -> [u8; DIGIT_COUNT] {
    [
        ((number / 1000) % 10) as u8,
        ((number / 100) % 10) as u8,
        ((number / 10) % 10) as u8,
        (number % 10) as u8,
    ]
}

/// Segment byte for `digit`, with the decimal point lit if `decimal` is set.
pub fn pattern(digit: u8, decimal: bool) -> u8 {
    let segments = DIGIT_PATTERN[digit as usize % 10];
    if decimal {
        segments & !DECIMAL_POINT
    } else {
        segments
    }
}

/// One refresh pass worth of `(segments, digit select)` pairs.
pub fn frame(number: u16, decimal: Option<usize>) -> [(u8, u8); DIGIT_COUNT] {
    let digits = digits(number);
    let mut out = [(0, 0); DIGIT_COUNT];
    for (slot, (entry, digit)) in out.iter_mut().zip(digits).enumerate() {
        *entry = (pattern(digit, decimal == Some(slot)), DIGIT_POSITION[slot]);
    }
    out
}
