use bitseq::{BitSeq, Error, ErrorKind, Result, Rounding};

#[test]
fn round_down_to_divisor() -> Result<()> {
    let mut seq: BitSeq = "11111111".parse()?;
    seq.make_divisible(3, Rounding::Down)?;
    assert_eq!(seq, "111111".parse()?);

    let mut seq: BitSeq = "11111111".parse()?;
    seq.make_divisible(10, Rounding::Down)?;
    assert!(seq.is_empty());

    Ok(())
}

#[test]
fn round_up_to_divisor() -> Result<()> {
    let mut seq: BitSeq = "11111111".parse()?;
    seq.make_divisible(3, Rounding::Up)?;
    assert_eq!(seq.len(), 9);
    assert_eq!(seq.get(8), Some(false));

    let mut seq: BitSeq = "11111111".parse()?;
    seq.make_divisible(10, Rounding::Up)?;
    assert_eq!(seq, "11111111_00".parse()?);

    Ok(())
}

#[test]
fn already_divisible() -> Result<()> {
    let mut seq: BitSeq = "101010".parse()?;

    seq.make_divisible(3, Rounding::Up)?;
    seq.make_divisible(2, Rounding::Down)?;
    seq.make_divisible(1, Rounding::Down)?;
    assert_eq!(seq, "101010".parse()?);

    let mut empty = BitSeq::new();
    empty.make_divisible(7, Rounding::Up)?;
    assert!(empty.is_empty());

    Ok(())
}

#[test]
fn rounding_from_flag() {
    assert_eq!(Rounding::from(true), Rounding::Up);
    assert_eq!(Rounding::from(false), Rounding::Down);
}

#[test]
fn zero_divisor() -> Result<()> {
    let mut seq: BitSeq = "101".parse()?;

    let err = seq.make_divisible(0, Rounding::Up).unwrap_err();
    assert_eq!(err, Error::ZeroDivisor);
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(seq, "101".parse()?);

    Ok(())
}

#[test]
fn oversized_padding() -> Result<()> {
    let mut seq: BitSeq = "101".parse()?;

    let err = seq.make_divisible(usize::MAX, Rounding::Up).unwrap_err();
    assert!(matches!(err, Error::CapacityExceeded { .. }));
    assert_eq!(seq.len(), 3);

    Ok(())
}
