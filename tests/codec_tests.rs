//! Binary codec tests: little-endian encoding, end-of-input handling, and
//! bit-exact round trips through the public API.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use wasval::{codec, Value, ValueError, ValueType, V128};

    #[test]
    fn f32_constant_encoding_matches_binary_format() {
        // 1.5f32 = 0x3FC00000, serialized little-endian
        assert_eq!(
            codec::serialize_to_vec(&Value::from_f32(1.5)),
            vec![0x00, 0x00, 0xC0, 0x3F]
        );
    }

    #[test]
    fn deserializing_from_empty_input_fails() {
        let mut offset = 0;
        assert!(matches!(
            codec::deserialize(ValueType::I32, &[], &mut offset),
            Err(ValueError::UnexpectedEndOfFile)
        ));
    }

    #[rstest]
    #[case(Value::from_i32(0))]
    #[case(Value::from_i32(i32::MIN))]
    #[case(Value::from_i64(i64::MAX))]
    #[case(Value::from_f32(-0.0))]
    #[case(Value::from_f32(f32::NAN))]
    #[case(Value::from_f64(f64::NEG_INFINITY))]
    #[case(Value::from_v128(V128::new([0xA5; 16])))]
    fn serialize_deserialize_round_trip(#[case] value: Value) {
        let buf = codec::serialize_to_vec(&value);
        assert_eq!(buf.len(), value.typ().byte_size());

        let mut offset = 0;
        let back = codec::deserialize(value.typ(), &buf, &mut offset).unwrap();
        assert!(back.bits_equal(&value));
        assert_eq!(offset, buf.len());
    }

    #[test]
    fn consecutive_values_share_one_buffer() {
        let values = [
            Value::from_i32(1),
            Value::from_f32(2.5),
            Value::from_v128(V128::from_i32x4([1, 2, 3, 4])),
            Value::from_i64(-1),
        ];

        let mut buf = Vec::new();
        for value in values.iter() {
            codec::serialize(value, &mut buf);
        }

        let mut offset = 0;
        for value in values.iter() {
            let back = codec::deserialize(value.typ(), &buf, &mut offset).unwrap();
            assert!(back.bits_equal(value));
        }
        assert_eq!(offset, buf.len());

        // A further read runs off the end.
        assert!(matches!(
            codec::deserialize(ValueType::I32, &buf, &mut offset),
            Err(ValueError::UnexpectedEndOfFile)
        ));
    }

    #[test]
    fn nan_payloads_are_not_normalized() {
        let noisy = Value::from_f64(f64::from_bits(0x7FF4_0000_0000_CAFE));
        let buf = codec::serialize_to_vec(&noisy);
        let mut offset = 0;
        let back = codec::deserialize(ValueType::F64, &buf, &mut offset).unwrap();
        assert!(back.bits_equal(&noisy));
    }

    #[test]
    fn reference_types_do_not_deserialize() {
        let mut offset = 0;
        assert!(matches!(
            codec::deserialize(ValueType::FuncRef, &[0u8; 8], &mut offset),
            Err(ValueError::TypeMismatch { .. })
        ));
    }
}
