use super::*;
use crate::{Point, PoseError, Translation};
use alloc::vec;

const TOL: f64 = 1e-4;

fn assert_quat_near(q: &Quaternion<f64>, expected: [f64; 4], tol: f64) {
    let got = q.as_array();
    for i in 0..4 {
        assert!(
            (got[i] - expected[i]).abs() < tol,
            "component {}: {:?} vs {:?}",
            i,
            got,
            expected
        );
    }
}

fn assert_rows_near(a: [[f64; 3]; 3], b: [[f64; 3]; 3], tol: f64) {
    for i in 0..3 {
        for j in 0..3 {
            assert!(
                (a[i][j] - b[i][j]).abs() < tol,
                "entry ({}, {}): {} vs {}",
                i,
                j,
                a[i][j],
                b[i][j]
            );
        }
    }
}

fn assert_consistent(r: &Rotation<f64>) {
    let from_q = converter::quaternion_to_matrix(r.quaternion());
    let from_opk = converter::opk_to_matrix(r.opk());
    assert_rows_near(from_q.rows(), r.rows(), 1e-9);
    assert_rows_near(from_opk.rows(), r.rows(), 1e-9);
}

// ======================== Construction ========================

#[test]
fn default_is_identity() {
    let r = Rotation::<f64>::default();
    assert_eq!(r.quaternion().as_array(), [1.0, 0.0, 0.0, 0.0]);
    assert_eq!(r.matrix(), &RotationMatrix::identity());
    assert_eq!(r.opk().as_array(), [0.0, 0.0, 0.0]);
    assert_eq!(r, Rotation::new(Quaternion::identity()));
}

#[test]
fn from_quaternion_derives_matrix_and_opk() {
    let r = Rotation::new(Quaternion::new(0.96593, 0.25882, 0.0, 0.0));
    assert_rows_near(
        r.rows(),
        [[1.0, 0.0, 0.0], [0.0, 0.8660, -0.5000], [0.0, 0.5000, 0.8660]],
        TOL,
    );
    assert!((r.opk().omega - 30.0).abs() < 1e-3);
    assert!(r.opk().phi.abs() < 1e-9);
    assert!(r.opk().kappa.abs() < 1e-9);
    assert_consistent(&r);
}

#[test]
fn from_quaternion_stores_normalized() {
    let r = Rotation::new(Quaternion::new(5.0, 4.0, 3.0, 2.0));
    assert_quat_near(r.quaternion(), [0.6804, 0.5443, 0.4082, 0.2722], TOL);
    assert!((r.quaternion().magnitude() - 1.0).abs() < 1e-12);
    assert_consistent(&r);
}

#[test]
fn from_matrix_keeps_matrix() {
    let rows = [
        [-0.9447, 0.0256, -0.3270],
        [-0.0967, -0.9743, 0.2032],
        [-0.3134, 0.2236, 0.9229],
    ];
    let r: Rotation<f64> = Rotation::new(RotationMatrix::from_rows(rows));
    assert_eq!(r.rows(), rows);
    assert!((r.opk().omega + 12.417).abs() < 1e-3);
    assert!((r.opk().phi + 19.087).abs() < 1e-3);
    assert!((r.opk().kappa + 178.448).abs() < 1e-3);
    assert_rows_near(converter::quaternion_to_matrix(r.quaternion()).rows(), rows, 1e-3);
}

#[test]
fn from_opk_keeps_angles() {
    let r: Rotation<f64> = Opk::new(10.0, 20.0, 30.0).into();
    assert_eq!(r.opk(), &Opk::new(10.0, 20.0, 30.0));
    assert_consistent(&r);
}

#[test]
fn zero_quaternion_is_identity() {
    let r = Rotation::new(Quaternion::new(0.0, 0.0, 0.0, 0.0));
    assert_eq!(r, Rotation::identity());
    assert_consistent(&r);

    let mut r = Rotation::new(Opk::new(1.0, 2.0, 3.0));
    r.set_quaternion(Quaternion::new(0.0, 0.0, 0.0, 0.0));
    assert_eq!(r, Rotation::identity());
}

#[test]
fn from_impls_match_new() {
    let q = Quaternion::new(0.7, 0.1, -0.2, 0.3);
    assert_eq!(Rotation::from(q), Rotation::new(q));
    let m = converter::quaternion_to_matrix(&q);
    assert_eq!(Rotation::from(m), Rotation::new(Representation::Matrix(m)));
}

// ======================== Setters ========================

#[test]
fn set_quaternion_rederives() {
    let mut r = Rotation::<f64>::identity();
    let h = core::f64::consts::FRAC_1_SQRT_2;
    r.set_quaternion(Quaternion::new(h, 0.0, 0.0, h));
    assert!((r.opk().kappa - 90.0).abs() < 1e-9);
    assert_consistent(&r);
}

#[test]
fn set_matrix_rederives() {
    let mut r = Rotation::<f64>::identity();
    r.set_matrix(RotationMatrix::from_rows([
        [0.0, 0.0, 1.0],
        [0.3420, 0.9397, 0.0],
        [-0.9397, 0.3420, 0.0],
    ]));
    assert_eq!(r.opk().omega, 0.0);
    assert!((r.opk().phi - 90.0).abs() < 1e-9);
    assert!((r.opk().kappa - 19.999).abs() < 1e-2);
}

#[test]
fn set_opk_rederives() {
    let mut r = Rotation::<f64>::identity();
    r.set_opk(Opk::new(0.0, 0.0, -45.0));
    assert_quat_near(r.quaternion(), [0.92388, 0.0, 0.0, -0.38268], TOL);
}

#[test]
fn set_rows_roundtrips_samples() {
    let samples = [
        [
            [0.7441, -0.3268, 0.5826],
            [0.5826, 0.7441, -0.3268],
            [-0.3268, 0.5827, 0.7441],
        ],
        [
            [-0.9296, 0.2928, 0.2240],
            [-0.0998, -0.7848, 0.6116],
            [0.3549, 0.5461, 0.7588],
        ],
    ];
    for rows in samples {
        let mut r = Rotation::<f64>::identity();
        r.set_rows(rows).unwrap();
        assert_eq!(r.rows(), rows);
        let rebuilt = Rotation::new(*r.quaternion());
        assert_rows_near(rebuilt.rows(), rows, 1e-3);
        let rebuilt = Rotation::new(*r.opk());
        assert_rows_near(rebuilt.rows(), rows, 1e-3);
    }
}

#[test]
fn set_rows_failure_leaves_rotation_untouched() {
    let mut r = Rotation::new(Opk::new(5.0, 6.0, 7.0));
    let before = r;
    let err = r
        .set_rows([["1", "0", "0"], ["0", "1", "0"], ["0", "0", "one"]])
        .unwrap_err();
    assert_eq!(err, PoseError::Conversion { input: "one".into() });
    assert_eq!(r, before);
}

#[test]
fn set_nested_list_like() {
    let mut r = Rotation::<f64>::identity();
    let mut rows = r.to_nested_vec();
    rows[1] = vec![0.0, 0.0, -1.0];
    rows[2] = vec![0.0, 1.0, 0.0];
    r.set_nested(&rows).unwrap();
    assert!((r.opk().omega - 90.0).abs() < 1e-9);
    assert_consistent(&r);

    let before = r;
    assert_eq!(
        r.set_nested(vec![vec!["1", "0", "0"]]),
        Err(PoseError::RowCount {
            expected: 3,
            found: 1
        })
    );
    assert_eq!(r, before);
}

// ======================== Algebra ========================

#[test]
fn inverse_identity_both_sides() {
    let r = Rotation::new(Quaternion::new(5.0, 4.0, 3.0, 2.0));
    assert_quat_near((r.inverse() * r).quaternion(), [1.0, 0.0, 0.0, 0.0], TOL);
    assert_quat_near((r * r.inverse()).quaternion(), [1.0, 0.0, 0.0, 0.0], TOL);
}

#[test]
fn invert_in_place() {
    let mut r = Rotation::new(Opk::new(10.0_f64, 0.0, 0.0));
    r.invert();
    assert!((r.opk().omega + 10.0).abs() < 1e-9);
}

#[test]
fn product_applies_rhs_first() {
    let rz: Rotation<f64> = Rotation::new(Opk::new(0.0, 0.0, 90.0));
    let rx: Rotation<f64> = Rotation::new(Opk::new(90.0, 0.0, 0.0));
    let p = Point::new(1.0, 0.0, 0.0);
    let composed = (&rx * &rz).transformed_point(&p);
    let sequential = rx.transformed_point(&rz.transformed_point(&p));
    for (a, b) in composed.as_array().iter().zip(sequential.as_array()) {
        assert!((a - b).abs() < 1e-12);
    }
    assert!((composed.z - 1.0).abs() < 1e-12);
}

#[test]
fn product_of_opk_axes_matches_matrix_product() {
    let a = Rotation::new(Opk::new(10.0_f64, 0.0, 0.0));
    let b = Rotation::new(Opk::new(0.0, 20.0, 0.0));
    let c = Rotation::new(Opk::new(0.0, 0.0, 30.0));
    let abc = a * b * c;
    assert!((abc.opk().omega - 10.0).abs() < 1e-9);
    assert!((abc.opk().phi - 20.0).abs() < 1e-9);
    assert!((abc.opk().kappa - 30.0).abs() < 1e-9);
    assert_rows_near(
        abc.rows(),
        (*a.matrix() * *b.matrix() * *c.matrix()).rows(),
        1e-12,
    );
}

#[test]
fn interpolate_endpoints_and_midpoint() {
    let a = Rotation::new(Opk::new(0.0, 0.0, 0.0));
    let b = Rotation::new(Opk::new(0.0, 0.0, 80.0));
    assert_rows_near(a.interpolate(&b, 0.0).rows(), a.rows(), 1e-9);
    assert_rows_near(a.interpolate(&b, 1.0).rows(), b.rows(), 1e-9);
    assert!((a.interpolate(&b, 0.25).opk().kappa - 20.0).abs() < 1e-9);
}

#[test]
fn interpolate_between_sign_flipped_quaternions() {
    let ra = Rotation::new(Opk::new(40.0, 10.0, -20.0));
    let rb = Rotation::new(-*ra.quaternion());
    assert_rows_near(rb.rows(), ra.rows(), 1e-12);

    for t in [0.0, 0.5, 1.0] {
        let r = ra.interpolate(&rb, t);
        assert!((r.quaternion().magnitude() - 1.0).abs() < 1e-12);
        assert_consistent(&r);
    }
    assert_rows_near(ra.interpolate(&rb, 0.0).rows(), ra.rows(), 1e-9);
    assert_rows_near(ra.interpolate(&rb, 1.0).rows(), ra.rows(), 1e-9);
}

#[test]
fn interpolate_extrapolates() {
    let a = Rotation::<f64>::identity();
    let b = Rotation::new(Opk::new(0.0, 0.0, 90.0));
    assert!((a.interpolate(&b, 1.5).opk().kappa - 135.0).abs() < 1e-9);
    assert!((a.interpolate(&b, -0.5).opk().kappa + 45.0).abs() < 1e-9);
}

// ======================== Transforms ========================

#[test]
fn transforms_delegate_to_matrix() {
    let r = Rotation::new(Opk::new(30.0, 0.0, 0.0));
    let t = Translation::new(0.0, 1.0, 0.0);
    let expected = r.matrix().transformed_point(&t);
    assert_eq!(r.transformed_point(&t), expected);

    let mut points = vec![Point::new(0.0, 1.0, 0.0), Point::new(0.0, 0.0, 2.0)];
    let copies: alloc::vec::Vec<Point<f64>> = r.transformed_points(&points);
    r.transform_points(&mut points);
    assert_eq!(copies, points);
    assert!((points[1].y + 1.0).abs() < 1e-12);
}
