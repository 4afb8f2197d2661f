use tinct::{models::rgb, ToLuv, ToRgb, ToXyz};

pub fn main() {
    let rgb = rgb(210, 105, 30);

    // 0.644480, 0.141263, 0.012983
    let linear = rgb.to_linear_light();

    // 31.867477, 23.902517, 4.163559
    let xyz = linear.to_xyz();

    // 55.990059, 86.285005, 47.751756
    let luv = xyz.to_luv();

    // 55.990059, 98.617099, 28.960973
    let lchuv = luv.to_polar();

    dbg!(linear, xyz, luv, lchuv);

    // And all the way back.
    assert_eq!(luv.to_rgb(), rgb);
}
