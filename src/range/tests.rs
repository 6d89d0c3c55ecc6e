//! Range coding integration tests.
//!
//! Encode bit sequences against model trajectories, then decode the
//! produced bytes with independently created models and check that both
//! sides stay in lock step.

use super::{Prob, RangeDecoder, RangeEncoder};

/// Deterministic xorshift generator so tests are reproducible.
struct XorShift32(u32);

impl XorShift32 {
    fn next(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}

/// Generate `n` bits where roughly `percent` of them are ones.
fn biased_bits(seed: u32, n: usize, percent: u32) -> Vec<bool> {
    let mut rng = XorShift32(seed);
    (0..n).map(|_| rng.next() % 100 < percent).collect()
}

fn encode_with_models(bits: &[bool], models: &mut [Prob]) -> Vec<u8> {
    let mut enc = RangeEncoder::new(Vec::new());
    for (i, &bit) in bits.iter().enumerate() {
        enc.encode_bit(bit, &mut models[i % models.len()]).unwrap();
    }
    enc.close().unwrap()
}

fn decode_with_models(data: &[u8], n: usize, models: &mut [Prob]) -> Vec<bool> {
    let mut dec = RangeDecoder::new(data).unwrap();
    (0..n)
        .map(|i| dec.decode_bit(&mut models[i % models.len()]).unwrap())
        .collect()
}

#[test]
fn test_roundtrip_adaptive_bits() {
    let bits = biased_bits(0x1234_5678, 10_000, 30);

    let mut enc_models = vec![Prob::new(); 8];
    let data = encode_with_models(&bits, &mut enc_models);

    let mut dec_models = vec![Prob::new(); 8];
    let decoded = decode_with_models(&data, bits.len(), &mut dec_models);

    assert_eq!(decoded, bits);
    // Both model pools saw the same bit sequence.
    assert_eq!(enc_models, dec_models);
}

#[test]
fn test_roundtrip_single_model() {
    for percent in [0, 5, 50, 95, 100] {
        let bits = biased_bits(0xDEAD_BEEF ^ percent, 4_096, percent);

        let mut p = Prob::new();
        let mut enc = RangeEncoder::new(Vec::new());
        for &bit in &bits {
            enc.encode_bit(bit, &mut p).unwrap();
        }
        let data = enc.close().unwrap();

        let mut q = Prob::new();
        let mut dec = RangeDecoder::new(&data[..]).unwrap();
        for &bit in &bits {
            assert_eq!(dec.decode_bit(&mut q).unwrap(), bit);
        }
        assert_eq!(p, q);
    }
}

#[test]
fn test_roundtrip_direct_bits() {
    let bits = biased_bits(0xCAFE_F00D, 2_000, 50);

    let mut enc = RangeEncoder::new(Vec::new());
    for &bit in &bits {
        enc.encode_direct_bit(bit).unwrap();
    }
    let data = enc.close().unwrap();

    let mut dec = RangeDecoder::new(&data[..]).unwrap();
    for &bit in &bits {
        assert_eq!(dec.decode_direct_bit().unwrap(), bit);
    }
}

#[test]
fn test_roundtrip_mixed_adaptive_and_direct() {
    let bits = biased_bits(0x0BAD_C0DE, 5_000, 40);

    let mut enc_models = vec![Prob::new(); 4];
    let mut enc = RangeEncoder::new(Vec::new());
    for (i, &bit) in bits.iter().enumerate() {
        if i % 3 == 0 {
            enc.encode_direct_bit(bit).unwrap();
        } else {
            enc.encode_bit(bit, &mut enc_models[i % 4]).unwrap();
        }
    }
    let data = enc.close().unwrap();

    let mut dec_models = vec![Prob::new(); 4];
    let mut dec = RangeDecoder::new(&data[..]).unwrap();
    for (i, &bit) in bits.iter().enumerate() {
        let decoded = if i % 3 == 0 {
            dec.decode_direct_bit().unwrap()
        } else {
            dec.decode_bit(&mut dec_models[i % 4]).unwrap()
        };
        assert_eq!(decoded, bit, "bit {} diverged", i);
    }
    assert_eq!(enc_models, dec_models);
}

#[test]
fn test_leading_byte_is_zero() {
    for percent in [10, 50, 90] {
        let bits = biased_bits(0x5EED ^ percent, 512, percent);
        let mut models = vec![Prob::new(); 2];
        let data = encode_with_models(&bits, &mut models);
        assert_eq!(data[0], 0x00);
    }
}

#[test]
fn test_biased_stream_compresses() {
    // 8192 highly predictable bits should code far below one byte per bit.
    let bits = vec![false; 8_192];
    let mut models = vec![Prob::new(); 1];
    let data = encode_with_models(&bits, &mut models);
    assert!(
        data.len() < 200,
        "expected strong compression, got {} bytes",
        data.len()
    );
}

#[test]
fn test_roundtrip_through_exact_limit() {
    let bits = biased_bits(0xFEED_FACE, 1_000, 25);
    let mut enc_models = vec![Prob::new(); 4];
    let data = encode_with_models(&bits, &mut enc_models);

    // A decoder limited to exactly the produced length must succeed.
    let mut dec_models = vec![Prob::new(); 4];
    let mut dec = RangeDecoder::with_limit(&data[..], data.len() as u64).unwrap();
    for (i, &bit) in bits.iter().enumerate() {
        assert_eq!(dec.decode_bit(&mut dec_models[i % 4]).unwrap(), bit);
    }
    assert!(dec.compressed() <= data.len() as u64);
}

#[test]
fn test_carry_propagation_roundtrip() {
    // Alternating improbable bits force long 0xFF cache runs through
    // shift_low; the decoder must still reproduce the sequence exactly.
    let mut bits = Vec::new();
    for i in 0..4_096 {
        bits.push(i % 17 == 0);
    }

    let mut p = Prob::new();
    let mut enc = RangeEncoder::new(Vec::new());
    for &bit in &bits {
        enc.encode_bit(bit, &mut p).unwrap();
    }
    let data = enc.close().unwrap();

    let mut q = Prob::new();
    let mut dec = RangeDecoder::new(&data[..]).unwrap();
    for (i, &bit) in bits.iter().enumerate() {
        assert_eq!(dec.decode_bit(&mut q).unwrap(), bit, "bit {} diverged", i);
    }
}

#[test]
fn test_available_predicts_final_length() {
    const LIMIT: u64 = 10_000;
    let bits = biased_bits(0xA5A5_A5A5, 2_048, 50);
    let mut p = Prob::new();
    let mut enc = RangeEncoder::with_limit(Vec::new(), LIMIT).unwrap();
    for &bit in &bits {
        enc.encode_bit(bit, &mut p).unwrap();
    }
    // available() accounts for every byte close() is still going to
    // emit, so limit - available is exactly the final stream length.
    let expected_len = LIMIT as i64 - enc.available();
    let data = enc.close().unwrap();
    assert_eq!(data.len() as i64, expected_len);
}
