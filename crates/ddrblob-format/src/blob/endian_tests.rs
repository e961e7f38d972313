use super::*;

#[test]
fn swap16_reverses_bytes() {
    assert_eq!(swap16(0x1234), 0x3412);
    assert_eq!(swap16(0x00FF), 0xFF00);
}

#[test]
fn swap32_reverses_bytes() {
    assert_eq!(swap32(0x1122_3344), 0x4433_2211);
    assert_eq!(swap32(1), 0x0100_0000);
}

#[test]
fn swaps_are_involutions() {
    for x in [0u16, 1, 0x00FF, 0x1234, 0xBEEF, u16::MAX] {
        assert_eq!(swap16(swap16(x)), x);
    }
    for x in [0u32, 1, 0xFFFF, 0x0001_0000, 0xDEAD_BEEF, u32::MAX] {
        assert_eq!(swap32(swap32(x)), x);
    }
    let bytes = [1, 2, 3, 4, 5, 6, 7, 8];
    assert_eq!(swap64_mirror(swap64_mirror(bytes)), bytes);
}

#[test]
fn swap64_mirror_is_not_per_word() {
    let bytes = [1, 2, 3, 4, 5, 6, 7, 8];
    assert_eq!(swap64_mirror(bytes), [8, 7, 6, 5, 4, 3, 2, 1]);

    // Swapping each 32-bit word in place would give a different answer.
    let per_word = [4, 3, 2, 1, 8, 7, 6, 5];
    assert_ne!(swap64_mirror(bytes), per_word);
}

#[test]
fn native_order_leaves_values_alone() {
    let order = ByteOrder::Native;
    assert!(!order.swaps_needed());
    assert_eq!(order.normalize_u16(0x1234), 0x1234);
    assert_eq!(order.normalize_u32(0x1122_3344), 0x1122_3344);
    let value = 0x0102_0304_0506_0708u64;
    assert_eq!(order.normalize_constant(value.to_ne_bytes()), value);
}

#[test]
fn swapped_order_reconstructs_constant() {
    let value = 0x0102_0304_0506_0708u64;
    let mut foreign = value.to_ne_bytes();
    foreign.reverse();

    let order = ByteOrder::Swapped;
    assert!(order.swaps_needed());
    assert_eq!(order.normalize_constant(foreign), value);
    assert_eq!(order.normalize_u32(swap32(77)), 77);
}

#[test]
fn producer_endianness_flips_with_order() {
    assert_ne!(
        ByteOrder::Native.producer_endianness(),
        ByteOrder::Swapped.producer_endianness()
    );
}
