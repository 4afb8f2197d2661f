use tinct::{models::rgb, Color, Space, ToRgb};

fn main() {
    let left = Color::from(rgb(255, 0, 0));
    let right = Color::from(rgb(0, 255, 0));

    let middle = left.blend(&right, 0.5).expect("both colors are rgb");
    println!("blended in rgb at 0.5 = {:?}", middle);

    // Blending in linear light gives a brighter midpoint.
    let linear = left
        .to_space(Space::LinearRgb)
        .blend(&right.to_space(Space::LinearRgb), 0.5)
        .expect("both colors are linear rgb");
    println!("blended in linear rgb at 0.5 = {:?}", linear.to_rgb());

    // Luv colors can not be blended.
    let luv = left.to_space(Space::Luv);
    if let Err(err) = luv.blend(&luv, 0.5) {
        println!("{}", err);
    }
}
