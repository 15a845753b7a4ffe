use bitseq::{BitSeq, Error, ErrorKind, Result};

#[test]
fn compare_equal() -> Result<()> {
    let a: BitSeq = "00001111".parse()?;
    let b: BitSeq = "00001111".parse()?;

    assert!(a.compare(&b));
    assert!(a.compare(&a));

    Ok(())
}

#[test]
fn compare_not_equal() -> Result<()> {
    let a: BitSeq = "00001111".parse()?;
    let b: BitSeq = "10001111".parse()?;
    let shorter: BitSeq = "0000111".parse()?;

    assert!(!a.compare(&b));
    assert!(!a.compare(&shorter));
    assert!(!shorter.compare(&a));
    assert!(BitSeq::new().compare(&BitSeq::new()));

    Ok(())
}

#[test]
fn combine_appends() -> Result<()> {
    let a: BitSeq = "101".parse()?;
    let b: BitSeq = "0011".parse()?;

    let combined = BitSeq::combine(a, b);
    assert_eq!(combined.len(), 7);
    assert_eq!(combined, "1010011".parse()?);

    Ok(())
}

#[test]
fn combine_with_empty() -> Result<()> {
    let seq: BitSeq = "110".parse()?;

    assert_eq!(BitSeq::combine(BitSeq::new(), seq.clone()), seq);
    assert_eq!(BitSeq::combine(seq.clone(), BitSeq::new()), seq);
    assert!(BitSeq::combine(BitSeq::new(), BitSeq::new()).is_empty());

    Ok(())
}

#[test]
fn append_keeps_suffix() -> Result<()> {
    let mut seq: BitSeq = "1".parse()?;
    let suffix: BitSeq = "01".parse()?;

    seq.append(&suffix);
    seq.append(&suffix);

    assert_eq!(seq, "10101".parse()?);
    assert_eq!(suffix.len(), 2);

    Ok(())
}

#[test]
fn overwrite_in_the_middle() -> Result<()> {
    let mut target = BitSeq::zeroed(8);
    let replacement: BitSeq = "111".parse()?;

    target.overwrite_at(&replacement, 2)?;
    assert_eq!(target, "00111000".parse()?);

    target.overwrite_at(&replacement, 5)?;
    assert_eq!(target, "00111111".parse()?);

    Ok(())
}

#[test]
fn overwrite_with_empty() -> Result<()> {
    let mut target: BitSeq = "1001".parse()?;

    target.overwrite_at(&BitSeq::new(), 4)?;
    assert_eq!(target, "1001".parse()?);

    Ok(())
}

#[test]
fn overwrite_rejects_overflow() -> Result<()> {
    let original: BitSeq = "1001".parse()?;
    let mut target = original.clone();
    let replacement: BitSeq = "11".parse()?;

    let err = target.overwrite_at(&replacement, 3).unwrap_err();
    assert_eq!(
        err,
        Error::IndexOutOfRange {
            start: 3,
            len: 2,
            available: 4
        }
    );
    assert_eq!(err.kind(), ErrorKind::OutOfRange);

    assert!(target.overwrite_at(&replacement, usize::MAX).is_err());
    assert_eq!(target, original);

    Ok(())
}
