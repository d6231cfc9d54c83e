//! Launches a projectile and plots its trajectory into `projectile.ppm`.
//!
//! The projectile starts one unit above the origin with a normalized launch
//! velocity; gravity and a head wind pull it back down. Each tick moves the
//! projectile by its velocity and updates the velocity from the environment.

use std::fs;

use anyhow::Context;
use glint::{point, vector, Canvas, Color, Tuple};
use log::info;

struct Projectile {
    position: Tuple,
    velocity: Tuple,
}

struct Environment {
    gravity: Tuple,
    wind: Tuple,
}

fn tick(environment: &Environment, projectile: &Projectile) -> Projectile {
    Projectile {
        position: projectile.position + projectile.velocity,
        velocity: projectile.velocity + environment.gravity + environment.wind,
    }
}

fn main() -> anyhow::Result<()> {
    glint::init_logger!();

    let mut projectile = Projectile {
        position: point(0.0, 1.0, 0.0),
        velocity: vector(1.0, 1.8, 0.0).normalize() * 11.25,
    };
    let environment = Environment {
        gravity: vector(0.0, -0.1, 0.0),
        wind: vector(-0.01, 0.0, 0.0),
    };

    let mut canvas = Canvas::new(900, 550);
    let trail = Color::new(1.0, 0.8, 0.6);

    let mut ticks = 0;
    while projectile.position.y > 0.0 {
        info!("tick {}: position {}", ticks, projectile.position);

        // The canvas Y axis points down, the world Y axis points up.
        let x = projectile.position.x.round() as i64;
        let y = canvas.height() as i64 - projectile.position.y.round() as i64;
        if (0..canvas.width() as i64).contains(&x) && (0..canvas.height() as i64).contains(&y) {
            canvas.set(x as u32, y as u32, trail);
        }

        projectile = tick(&environment, &projectile);
        ticks += 1;
    }
    info!("projectile landed after {} ticks", ticks);

    fs::write("projectile.ppm", canvas.to_ppm()).context("failed to write projectile.ppm")?;
    Ok(())
}
