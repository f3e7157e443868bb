use trace_connect_core::geometry::{classify, solve};
use trace_connect_core::{connect, LayerId, Point, Track};

fn main() {
    let layer = LayerId(0);
    let mut bus = Track::new(Point::new(0, 10_000_000), Point::new(18_000_000, 10_000_000), layer);
    let mut stub = Track::new(Point::new(30_000_000, 0), Point::new(27_000_000, 3_000_000), layer);

    println!("bus:  {}", classify(&bus));
    println!("stub: {}", classify(&stub));
    println!("outcome: {:?}", solve(&bus, &stub));

    match connect(&mut [&mut bus, &mut stub]) {
        Ok(point) => {
            println!("joined at ({}, {})", point.x, point.y);
            println!("bus:  {:?} -> {:?}", bus.start, bus.end);
            println!("stub: {:?} -> {:?}", stub.start, stub.end);
        }
        Err(e) => println!("cannot connect: {}", e),
    }
}
