//! End-to-end checks through the facade crate's public API.

use glint::{assert_approx_eq, point, vector, Canvas, Color, Mat4f, Tuple};

#[test]
fn projectile_comes_back_down() {
    let mut position = point(0.0, 1.0, 0.0);
    let mut velocity = vector(1.0, 1.0, 0.0).normalize();
    let gravity = vector(0.0, -0.1, 0.0);
    let wind = vector(-0.01, 0.0, 0.0);

    let mut ticks = 0;
    while position.y > 0.0 {
        position = position + velocity;
        velocity = velocity + gravity + wind;
        ticks += 1;
        assert!(ticks < 1000, "projectile never landed");
    }

    assert!(position.is_point());
    assert!(velocity.is_vector());
    assert!(ticks > 1);
}

#[test]
fn transform_and_undo() {
    // A shear-ish transform applied to a point, undone by its inverse.
    let transform = Mat4f::from_rows([
        [1.0, 0.0, 0.0, 5.0],
        [0.0, 2.0, 0.0, -3.0],
        [0.0, 0.0, 4.0, 2.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    let p = point(1.0, 2.0, 3.0);

    let moved = transform * p;
    assert_eq!(moved, Tuple::new(6.0, 1.0, 14.0, 1.0));
    assert!(moved.is_point());

    assert!(transform.is_invertible());
    assert_approx_eq!(transform.invert() * moved, p);
}

#[test]
fn render_to_ppm() {
    let mut canvas = Canvas::new(5, 3);
    canvas.set(0, 0, Color::new(1.5, 0.0, 0.0));
    canvas.set(2, 1, Color::new(0.0, 0.5, 0.0));
    canvas.set(4, 2, Color::new(-0.5, 0.0, 1.0));

    let ppm = canvas.to_ppm();
    assert_eq!(
        ppm,
        "P3\n5 3\n255\n\
         255 0 0 0 0 0 0 0 0 0 0 0 0 0 0\n\
         0 0 0 0 0 0 0 128 0 0 0 0 0 0 0\n\
         0 0 0 0 0 0 0 0 0 0 0 0 0 0 255\n"
    );
}
