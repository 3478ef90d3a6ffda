use shapestream::*;
use std::env::args;

fn loc(x: f32, y: f32) -> Location {
	Location::new(x, y)
}

fn main() {
	// sampling step in milliseconds, from the command line
	let step = args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(250u64);

	let mut scene = Scene::default();

	let rover = Animatable::new(1, Shape::circle(0.5))
		.filled(true)
		.with_color(Color::new(0, 128, 255))
		.with_path(vec![
			PathSegment::new(loc(0.0, 0.0), 0, 0.0).ending_at(loc(4.0, 0.0), 1000, 0.0),
			PathSegment::new(loc(4.0, 0.0), 1000, 0.0).ending_at(loc(4.0, 3.0), 2000, 1.57),
		]);

	let mut depot = Animatable::new(2, Shape::rectangle(2.0, 2.0))
		.with_color(Color::new(200, 60, 20));
	depot.push_segment(PathSegment::new(loc(4.0, 3.0), 0, 0.0));

	let messages = vec![
		Message::begin(0),
		Message::show(rover),
		Message::show(depot),
		Message::update(1, vec![
			PathSegment::new(loc(0.0, 0.0), 0, 0.0).ending_at(loc(4.0, 3.0), 2000, 0.64),
		]),
	];

	if let Err((i, e)) = scene.apply_all(messages) {
		println!("message {} rejected: {}", i, e);
		return;
	}

	scene.log_scene();

	let mut t = 0;
	while t <= 2000 {
		for placement in scene.snapshot(t) {
			let center = placement.shape.center();
			println!(
				"t={:>5} id={} at ({:.2}, {:.2}) facing {:.2}",
				t, placement.id, center.x, center.y, placement.orientation
			);
		}
		for (a, b) in scene.overlapping(t) {
			println!("t={:>5} {} overlaps {}", t, a, b);
		}
		t += step.max(1);
	}

	println!("{:?}", scene.apply(Message::hide(1)));
	println!("{:?}", scene.apply(Message::hide(1)));
}
