//! Golden tests for number spelling.
//!
//! These tests pin the full output of the public API for a corpus of
//! representative inputs in every supported locale.

use num_bigint::BigInt;
use num_words::{
    ConvertOptions, Locale, NumericInput, WordsError, convert, convert_english,
    convert_vietnamese,
};
use pretty_assertions::assert_eq;

/// Test case structure for golden tests.
struct GoldenTestCase {
    input: &'static str,
    expected: &'static str,
    description: &'static str,
}

/// Vietnamese golden tests.
const VI_GOLDEN_TESTS: &[GoldenTestCase] = &[
    GoldenTestCase {
        input: "15",
        expected: "mười lăm",
        description: "Teen with lăm",
    },
    GoldenTestCase {
        input: "21",
        expected: "hai mươi mốt",
        description: "Units one after twenty becomes mốt",
    },
    GoldenTestCase {
        input: "105",
        expected: "một trăm lẻ năm",
        description: "Zero tens filler keeps base five",
    },
    GoldenTestCase {
        input: "125",
        expected: "một trăm hai mươi lăm",
        description: "Five after tens becomes lăm",
    },
    GoldenTestCase {
        input: "1050",
        expected: "một nghìn không trăm năm mươi",
        description: "Zero hundreds filler, not lẻ",
    },
    GoldenTestCase {
        input: "1005",
        expected: "một nghìn không trăm lẻ năm",
        description: "Zero hundreds filler followed by lẻ",
    },
    GoldenTestCase {
        input: "2021",
        expected: "hai nghìn không trăm hai mươi mốt",
        description: "Year-like value",
    },
    GoldenTestCase {
        input: "15000",
        expected: "mười lăm nghìn",
        description: "Teen in the thousands cluster",
    },
    GoldenTestCase {
        input: "1000001",
        expected: "một triệu không trăm lẻ một",
        description: "Skipped zero cluster",
    },
    GoldenTestCase {
        input: "2500000000",
        expected: "hai tỷ năm trăm triệu",
        description: "Billions",
    },
    GoldenTestCase {
        input: "-45.05",
        expected: "âm bốn mươi lăm phẩy không năm",
        description: "Negative decimal",
    },
    GoldenTestCase {
        input: "0.5",
        expected: "không phẩy năm",
        description: "Zero integer with fraction",
    },
];

/// English golden tests.
const EN_GOLDEN_TESTS: &[GoldenTestCase] = &[
    GoldenTestCase {
        input: "15",
        expected: "fifteen",
        description: "Teen",
    },
    GoldenTestCase {
        input: "-123",
        expected: "negative one hundred twenty-three",
        description: "Negative with hyphenated tens",
    },
    GoldenTestCase {
        input: "3.14",
        expected: "three point one four",
        description: "Fraction read digit by digit",
    },
    GoldenTestCase {
        input: "1005",
        expected: "one thousand five",
        description: "No filler words in English",
    },
    GoldenTestCase {
        input: "2345",
        expected: "two thousand three hundred forty-five",
        description: "Thousands",
    },
    GoldenTestCase {
        input: "2500000",
        expected: "two million five hundred thousand",
        description: "Millions",
    },
    GoldenTestCase {
        input: "7.10",
        expected: "seven point one zero",
        description: "Trailing fractional zero is kept",
    },
    GoldenTestCase {
        input: "0007",
        expected: "seven",
        description: "Leading zeros are dropped",
    },
];

fn run_golden(cases: &[GoldenTestCase], locale: Locale) {
    for case in cases {
        let result = convert(case.input, ConvertOptions::with_locale(locale))
            .unwrap_or_else(|e| panic!("{} ({}): {e}", case.description, case.input));
        assert_eq!(
            result, case.expected,
            "{} ({})",
            case.description, case.input
        );
    }
}

#[test]
fn test_vietnamese_golden() {
    run_golden(VI_GOLDEN_TESTS, Locale::Vi);
}

#[test]
fn test_english_golden() {
    run_golden(EN_GOLDEN_TESTS, Locale::En);
}

#[test]
fn test_machine_numbers() {
    assert_eq!(convert_english(3.14).unwrap(), "three point one four");
    assert_eq!(convert_english(-123).unwrap(), "negative one hundred twenty-three");
    assert_eq!(convert_vietnamese(1050).unwrap(), "một nghìn không trăm năm mươi");
    assert_eq!(convert_vietnamese(1005u64).unwrap(), "một nghìn không trăm lẻ năm");
    assert_eq!(convert_english(2.5f32).unwrap(), "two point five");
    assert_eq!(convert_english(0.1f32).unwrap(), "zero point one");
    assert_eq!(convert_english(3.14f32).unwrap(), "three point one four");
    assert_eq!(convert_vietnamese(-0.5f32).unwrap(), "âm không phẩy năm");
    assert!(matches!(
        convert_english(f32::NAN),
        Err(WordsError::NonFinite { .. })
    ));
}

#[test]
fn test_zero_filler_invariant() {
    let filler = "không trăm lẻ";
    for thousands in [1u64, 7, 42, 999] {
        for units in 1..=9u64 {
            let n = thousands * 1000 + units;
            let words = convert_vietnamese(n).unwrap();
            assert!(
                words.contains(filler),
                "{n} should contain {filler:?}: {words}"
            );
        }
    }
}

#[test]
fn test_arbitrary_precision_english() {
    let big: BigInt = "1234567890123456789".parse().unwrap();
    let words = convert_english(big).unwrap();
    assert!(words.starts_with("one quintillion two hundred thirty-four quadrillion"));
    assert!(words.ends_with("four hundred fifty-six thousand seven hundred eighty-nine"));

    let huge = format!("987{}654", "0".repeat(60));
    let words = convert_english(huge.as_str()).unwrap();
    assert!(words.starts_with("nine hundred eighty-seven vigintillion"));
    assert!(words.ends_with("six hundred fifty-four"));
}

#[test]
fn test_arbitrary_precision_vietnamese() {
    let words = convert_vietnamese(u64::MAX).unwrap();
    // 18 446 744 073 709 551 615
    assert!(words.starts_with("mười tám tỷ tỷ bốn trăm bốn mươi sáu triệu"));
    assert!(words.ends_with("năm trăm năm mươi mốt nghìn sáu trăm mười lăm"));

    let big = NumericInput::BigInt(BigInt::from(u128::MAX));
    let words = convert(big, ConvertOptions::with_locale(Locale::Vi)).unwrap();
    // 340 282 366 920 938 463 463 374 607 431 768 211 455
    assert!(words.starts_with("ba trăm bốn mươi tỷ tỷ tỷ tỷ hai trăm tám mươi hai triệu"));
    assert!(words.ends_with("hai trăm mười một nghìn bốn trăm năm mươi lăm"));
}

#[test]
fn test_error_kinds() {
    assert!(matches!(convert_english(""), Err(WordsError::EmptyValue)));
    assert!(matches!(convert_english("   "), Err(WordsError::EmptyValue)));
    assert!(matches!(
        convert_english("12abc"),
        Err(WordsError::InvalidFormat { .. })
    ));
    assert!(matches!(
        convert_english(f64::NEG_INFINITY),
        Err(WordsError::NonFinite { .. })
    ));
    assert!(matches!(
        convert_english(f64::NAN),
        Err(WordsError::NonFinite { .. })
    ));
    assert!(matches!(
        num_words::convert_tagged(1, "ja"),
        Err(WordsError::UnsupportedLocale { .. })
    ));
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..8u64)
        .map(|i| {
            std::thread::spawn(move || {
                (0..500u64)
                    .map(|n| convert_vietnamese(i * 1000 + n).map(|w| w.len()))
                    .collect::<Result<Vec<_>, _>>()
            })
        })
        .collect();

    for handle in handles {
        let lengths = handle.join().expect("thread panicked").unwrap();
        assert!(lengths.iter().all(|&len| len > 0));
    }
}
