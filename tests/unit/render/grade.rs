use super::*;

#[test]
fn identity_grade_leaves_pixels_alone() {
    let mut data = vec![10, 200, 30, 255, 1, 2, 3, 4];
    let before = data.clone();
    apply_grade(
        &mut data,
        2,
        Grade {
            saturation: 1.0,
            contrast: 1.0,
        },
    );
    assert_eq!(data, before);
}

#[test]
fn zero_saturation_is_grayscale() {
    let mut data = vec![200, 100, 50, 255, 0, 255, 0, 255];
    apply_grade(
        &mut data,
        1,
        Grade {
            saturation: 0.0,
            contrast: 1.0,
        },
    );
    for px in data.chunks_exact(4) {
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
        assert_eq!(px[3], 255);
    }
}

#[test]
fn contrast_pushes_away_from_mid_gray() {
    let mut data = vec![100, 100, 100, 255, 180, 180, 180, 255];
    apply_grade(
        &mut data,
        2,
        Grade {
            saturation: 1.0,
            contrast: 1.25,
        },
    );
    assert!(data[0] < 100);
    assert!(data[4] > 180);
}

#[test]
fn force_opaque_only_touches_alpha() {
    let mut data = vec![87, 89, 101, 254, 10, 20, 30, 253, 1, 2, 3, 255];
    force_opaque(&mut data, 3);
    assert_eq!(data, vec![87, 89, 101, 255, 10, 20, 30, 255, 1, 2, 3, 255]);
}

#[test]
fn premultiplied_channels_never_exceed_alpha() {
    let mut data = vec![120, 120, 120, 128];
    apply_grade(
        &mut data,
        1,
        Grade {
            saturation: 1.0,
            contrast: 3.0,
        },
    );
    assert!(data[..3].iter().all(|&c| c <= 128));
}
