use crate::{Result, VroumError};

pub const MIN_SIZE: u32 = 8;
pub const MAX_SIZE: u32 = 512;
pub const DEFAULT_SIZE: u32 = 32;

/// Interior size requested for the seeded strategy.
///
/// An absent parameter means [`DEFAULT_SIZE`]. Anything that is not an
/// integer in `MIN_SIZE..=MAX_SIZE` is rejected with
/// [`VroumError::InvalidSize`], whose message is meant for the caller.
pub fn parse_size(param: Option<&str>) -> Result<u32> {
    let Some(raw) = param else {
        return Ok(DEFAULT_SIZE);
    };

    let size: i64 = raw.trim().parse().map_err(|_| {
        log::debug!("validate: {:?} is not an integer", raw);
        VroumError::InvalidSize
    })?;

    let size = u32::try_from(size).map_err(|_| {
        log::debug!("validate: size {} out of range", size);
        VroumError::InvalidSize
    })?;
    check_size(size)
}

/// Reject an interior size outside `MIN_SIZE..=MAX_SIZE`.
pub fn check_size(size: u32) -> Result<u32> {
    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        log::debug!("validate: size {} out of range", size);
        return Err(VroumError::InvalidSize);
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, Some(32))]
    #[case(Some("7"), None)]
    #[case(Some("8"), Some(8))]
    #[case(Some("64"), Some(64))]
    #[case(Some(" 100 "), Some(100))]
    #[case(Some("512"), Some(512))]
    #[case(Some("513"), None)]
    #[case(Some("-8"), None)]
    #[case(Some("0"), None)]
    #[case(Some("abc"), None)]
    #[case(Some("12.5"), None)]
    #[case(Some(""), None)]
    #[case(Some("99999999999999999999999"), None)]
    fn size_boundaries(
        #[case] param: Option<&str>,
        #[case] expected: Option<u32>,
    ) {
        match expected {
            Some(size) => assert_eq!(parse_size(param).unwrap(), size),
            None => assert!(matches!(
                parse_size(param),
                Err(VroumError::InvalidSize)
            )),
        }
    }

    #[rstest]
    #[case(0, false)]
    #[case(4, false)]
    #[case(8, true)]
    #[case(512, true)]
    #[case(513, false)]
    #[case(u32::MAX, false)]
    fn numeric_size_range(#[case] size: u32, #[case] ok: bool) {
        assert_eq!(check_size(size).is_ok(), ok);
    }

    #[test]
    fn rejection_message_is_user_facing() {
        let err = parse_size(Some("nope")).unwrap_err();
        assert!(err.is_user_error());
        assert_eq!(
            err.to_string(),
            "Don't toy with the bot! Enter a valid integer between 8 and 512"
        );
    }
}
