use thiserror::Error;

use super::metadata::{BLOCK_SIZE_RANGE, DIVISION_RANGE, MAX_SIZE, QUIET_BLOCKS};

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum MarkerError {
    // Marker builder
    #[error(
        "Division out of range: got {}, expected {}..={}",
        .0,
        DIVISION_RANGE.start(),
        DIVISION_RANGE.end()
    )]
    DivisionOutOfRange(u32),
    #[error(
        "Block size out of range: got {}, expected {}..={}",
        .0,
        BLOCK_SIZE_RANGE.start(),
        BLOCK_SIZE_RANGE.end()
    )]
    BlockSizeOutOfRange(u32),
    #[error(
        "Incorrect marker proportions: size {size} is not a multiple of division + 4 = {}",
        .division + QUIET_BLOCKS
    )]
    IncorrectProportions { size: u32, division: u32 },
    #[error("Size too large: got {}, expected at most {}", .0, MAX_SIZE)]
    SizeTooLarge(u32),

    // Persistence
    #[error("Failed to write marker image: {0}")]
    Image(#[from] image::ImageError),
}

impl MarkerError {
    pub fn is_config(&self) -> bool {
        !matches!(self, Self::Image(_))
    }
}

pub type MarkerResult<T> = Result<T, MarkerError>;

#[cfg(test)]
mod error_tests {
    use super::MarkerError;

    #[test]
    fn test_config_messages_name_valid_range() {
        assert_eq!(
            MarkerError::DivisionOutOfRange(9).to_string(),
            "Division out of range: got 9, expected 3..=8"
        );
        assert_eq!(
            MarkerError::BlockSizeOutOfRange(15).to_string(),
            "Block size out of range: got 15, expected 16..=32"
        );
        assert_eq!(
            MarkerError::IncorrectProportions { size: 290, division: 5 }.to_string(),
            "Incorrect marker proportions: size 290 is not a multiple of division + 4 = 9"
        );
        assert_eq!(
            MarkerError::SizeTooLarge(9000).to_string(),
            "Size too large: got 9000, expected at most 8192"
        );
    }

    #[test]
    fn test_is_config() {
        assert!(MarkerError::DivisionOutOfRange(2).is_config());
        assert!(MarkerError::SizeTooLarge(9000).is_config());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(!MarkerError::Image(image::ImageError::IoError(io)).is_config());
    }
}
