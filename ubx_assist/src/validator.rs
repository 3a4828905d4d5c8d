use crate::{
    checksum::UbxChecksumCalc,
    constants::{UBX_CHECKSUM_LEN, UBX_CLASS_MGA},
    error::RejectReason,
    frame::MgaFrame,
};

/// Accepts a candidate body iff it belongs to the UBX-MGA class and its
/// trailing checksum pair matches the bytes in front of it.
///
/// The class is checked first, so a non-MGA candidate is reported as
/// [`RejectReason::WrongClass`] whatever its checksum.
pub fn validate(candidate: &[u8]) -> Result<MgaFrame<'_>, RejectReason> {
    // The splitter never yields empty candidates, but an empty slice has no class either
    let class = candidate.first().copied().unwrap_or_default();
    if candidate.is_empty() || class != UBX_CLASS_MGA {
        return Err(RejectReason::WrongClass { class });
    }

    let split = candidate.len().saturating_sub(UBX_CHECKSUM_LEN);
    let (body, trailer) = candidate.split_at(split);
    let mut calc = UbxChecksumCalc::new();
    calc.update(body);
    let calculated = calc.result();

    match *trailer {
        [ck_a, ck_b] if calc.is_valid(ck_a, ck_b) => Ok(MgaFrame::new(candidate)),
        [ck_a, ck_b] => Err(RejectReason::BadChecksum {
            calculated,
            received: Some((ck_a, ck_b)),
        }),
        _ => Err(RejectReason::BadChecksum {
            calculated,
            received: None,
        }),
    }
}
