use bitseq::{BitSeq, Error, ErrorKind, Result};

#[test]
fn change_endian_per_byte() -> Result<()> {
    let mut seq: BitSeq = "11001010_11110000".parse()?;
    seq.change_endian()?;

    assert_eq!(seq, "01010011_00001111".parse()?);

    Ok(())
}

#[test]
fn change_endian_chains() -> Result<()> {
    let mut seq: BitSeq = "10000000".parse()?;
    let len = seq.change_endian()?.reverse().len();

    assert_eq!(len, 8);
    assert_eq!(seq, "10000000".parse()?);

    Ok(())
}

#[test]
fn change_endian_empty() -> Result<()> {
    let mut seq = BitSeq::new();
    seq.change_endian()?;

    assert!(seq.is_empty());

    Ok(())
}

#[test]
fn change_endian_rejects_partial_byte() -> Result<()> {
    let original: BitSeq = "11001010_111".parse()?;
    let mut seq = original.clone();

    let err = seq.change_endian().unwrap_err();
    assert_eq!(err, Error::NotByteAligned { len: 11 });
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(seq, original);

    Ok(())
}

#[test]
fn reverse_even() -> Result<()> {
    let mut seq: BitSeq = "11001010_11110000".parse()?;
    seq.reverse();

    assert_eq!(seq, "00001111_01010011".parse()?);

    Ok(())
}

#[test]
fn reverse_odd_keeps_middle() -> Result<()> {
    let mut seq: BitSeq = "1010011".parse()?;
    seq.reverse();

    assert_eq!(seq, "1100101".parse()?);
    assert!(!seq[3]);

    Ok(())
}

#[test]
fn reverse_trivial() {
    let mut empty = BitSeq::new();
    empty.reverse();
    assert!(empty.is_empty());

    let mut single = BitSeq::from_bools(&[true]);
    single.reverse();
    assert_eq!(single, BitSeq::from_bools(&[true]));
}
