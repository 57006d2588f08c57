use gradkit_core::error::GradError;
use gradkit_core::image::{Image, PixelDepth};
use gradkit_core::validate::{check_depth, check_gray_pair, check_single_channel};

mod common;
use common::sentinel_dst;

// ---------------------------------------------------------------------------
// check_depth
// ---------------------------------------------------------------------------

#[test]
fn test_check_depth_accepts_matching_pairs() {
    let a = Image::new(4, 4, 1, PixelDepth::U8);
    let b = Image::new(4, 4, 1, PixelDepth::S16);
    assert!(check_depth(&[(&a, PixelDepth::U8), (&b, PixelDepth::S16)]).is_ok());
}

#[test]
fn test_check_depth_reports_first_offender() {
    let a = Image::new(4, 4, 1, PixelDepth::U8);
    let b = Image::new(4, 4, 1, PixelDepth::U16);
    let c = Image::new(4, 4, 1, PixelDepth::F32);
    let err = check_depth(&[
        (&a, PixelDepth::U8),
        (&b, PixelDepth::U8),
        (&c, PixelDepth::U8),
    ])
    .unwrap_err();
    match err {
        GradError::DepthOrFormatMismatch {
            index,
            expected,
            found,
        } => {
            assert_eq!(index, 1);
            assert_eq!(expected, PixelDepth::U8);
            assert_eq!(found, PixelDepth::U16);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_check_depth_empty_is_ok() {
    assert!(check_depth(&[]).is_ok());
}

#[test]
fn test_check_single_channel_rejects_rgb() {
    let gray = Image::new(4, 4, 1, PixelDepth::U8);
    let rgb = Image::new(4, 4, 3, PixelDepth::U8);
    let err = check_single_channel(&[&gray, &rgb]).unwrap_err();
    assert!(matches!(
        err,
        GradError::ChannelCountNotSupported {
            index: 1,
            channels: 3
        }
    ));
}

// ---------------------------------------------------------------------------
// check_gray_pair
// ---------------------------------------------------------------------------

#[test]
fn test_gray_pair_accepts_valid_pair() {
    let src = Image::filled(5, 4, 10);
    let dst = sentinel_dst(5, 4);
    assert!(check_gray_pair(&src, &dst).is_ok());
}

#[test]
fn test_gray_pair_rejects_source_depth() {
    let src = Image::new(5, 4, 1, PixelDepth::S8);
    let dst = sentinel_dst(5, 4);
    let err = check_gray_pair(&src, &dst).unwrap_err();
    assert!(matches!(
        err,
        GradError::DepthOrFormatMismatch { index: 0, .. }
    ));
}

#[test]
fn test_gray_pair_rejects_destination_depth() {
    let src = Image::filled(5, 4, 10);
    let dst = Image::new(5, 4, 1, PixelDepth::U16);
    let err = check_gray_pair(&src, &dst).unwrap_err();
    assert!(matches!(
        err,
        GradError::DepthOrFormatMismatch { index: 1, .. }
    ));
}

#[test]
fn test_gray_pair_rejects_source_channels() {
    let src = Image::new(5, 4, 3, PixelDepth::U8);
    let dst = sentinel_dst(5, 4);
    let err = check_gray_pair(&src, &dst).unwrap_err();
    assert!(matches!(
        err,
        GradError::ChannelCountNotSupported {
            index: 0,
            channels: 3
        }
    ));
}

#[test]
fn test_gray_pair_rejects_destination_channels() {
    let src = Image::filled(5, 4, 10);
    let dst = Image::new(5, 4, 2, PixelDepth::U8);
    let err = check_gray_pair(&src, &dst).unwrap_err();
    assert!(matches!(
        err,
        GradError::ChannelCountNotSupported {
            index: 1,
            channels: 2
        }
    ));
}

#[test]
fn test_gray_pair_depth_checked_before_channels() {
    // Both wrong: depth failure wins.
    let src = Image::new(5, 4, 3, PixelDepth::F32);
    let dst = sentinel_dst(5, 4);
    let err = check_gray_pair(&src, &dst).unwrap_err();
    assert!(matches!(err, GradError::DepthOrFormatMismatch { .. }));
}

#[test]
fn test_gray_pair_rejects_size_mismatch() {
    let src = Image::filled(5, 4, 10);
    let dst = sentinel_dst(4, 5);
    let err = check_gray_pair(&src, &dst).unwrap_err();
    assert!(matches!(
        err,
        GradError::DimensionMismatch {
            src_width: 5,
            src_height: 4,
            dst_width: 4,
            dst_height: 5,
        }
    ));
}

// ---------------------------------------------------------------------------
// Image construction
// ---------------------------------------------------------------------------

#[test]
fn test_from_gray_rejects_short_buffer() {
    let err = Image::from_gray(4, 4, vec![0; 15]).unwrap_err();
    assert!(matches!(
        err,
        GradError::BufferSizeMismatch {
            expected: 16,
            actual: 15
        }
    ));
}

#[test]
fn test_from_raw_accounts_for_sample_width() {
    let img = Image::from_raw(3, 2, 1, PixelDepth::S16, vec![0; 12]).unwrap();
    assert_eq!(img.expected_len(), 12);
    assert!(Image::from_raw(3, 2, 1, PixelDepth::S16, vec![0; 6]).is_err());
}

#[test]
fn test_from_raw_rejects_overflowing_header() {
    let err = Image::from_raw(usize::MAX, 2, 1, PixelDepth::U8, vec![0; 4]).unwrap_err();
    assert!(matches!(err, GradError::BufferSizeMismatch { actual: 4, .. }));

    let err = Image::from_raw(usize::MAX / 2, 3, 1, PixelDepth::F32, Vec::new()).unwrap_err();
    assert!(matches!(err, GradError::BufferSizeMismatch { actual: 0, .. }));
}

#[test]
fn test_error_messages_name_the_image() {
    let src = Image::new(5, 4, 1, PixelDepth::U16);
    let dst = sentinel_dst(5, 4);
    let msg = check_gray_pair(&src, &dst).unwrap_err().to_string();
    assert_eq!(msg, "Image 0: expected 8U depth, found 16U");
}
