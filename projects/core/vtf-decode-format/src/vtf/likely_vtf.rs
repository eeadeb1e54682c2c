use super::constants::*;

/// Determines if the given data likely represents a VTF texture.
/// This is done by checking the 'MAGIC' header, `VTF\0` at offset 0 and minimum size.
/// For more accurate checking including header validation, use [`parse_header`].
///
/// [`parse_header`]: crate::vtf::parse_header::parse_header
#[inline(always)]
pub fn likely_vtf(data: &[u8]) -> bool {
    data.len() >= HEADER_SIZE_7_0
        && u32::from_le_bytes([data[0], data[1], data[2], data[3]]) == VTF_MAGIC
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use core::iter::repeat_n;

    #[test]
    fn likely_vtf_matches_valid_header_and_sufficient_length() {
        let valid_data = *b"VTF\0";
        let valid_data = valid_data
            .into_iter()
            .chain(repeat_n(0, 60))
            .collect::<Vec<u8>>();
        assert!(likely_vtf(&valid_data));
    }

    #[test]
    fn likely_vtf_rejects_valid_header_but_insufficient_length() {
        let short_valid_header = b"VTF\0"
            .iter()
            .copied()
            .chain(repeat_n(0, 59))
            .collect::<Vec<u8>>();
        assert!(!likely_vtf(&short_valid_header));
    }

    #[test]
    fn likely_vtf_rejects_invalid_header() {
        let invalid_data = b"VTF "
            .iter()
            .copied()
            .chain(repeat_n(0, 60))
            .collect::<Vec<u8>>();
        assert!(!likely_vtf(&invalid_data));
    }

    #[test]
    fn likely_vtf_rejects_empty_data() {
        let empty_data: [u8; 0] = [];
        assert!(!likely_vtf(&empty_data));
    }
}
