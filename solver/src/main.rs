use std::num::NonZero;

use ductwork::session::{DeliveryEvent, Session, SessionConfig};
use ductwork::{HintOutcome, LevelBuilder};
use log::info;

fn main() {
    env_logger::init();

    let level = LevelBuilder::with_dims((NonZero::new(6).unwrap(), NonZero::new(6).unwrap()))
        .entry_row(1)
        .exit_row(4)
        .pickups(2)
        .build()
        .unwrap();

    // enough hints to turn every route cell
    let config = SessionConfig { hint_budget: 36, ..Default::default() };
    let mut session = Session::seeded(level, config, 2024);

    println!("{}", session.board());
    println!("route: {} cells, lit from the entry: {}", session.board().route().len(), session.reachable().len());

    let mut hints = 0;
    while let Ok(HintOutcome::Applied(location)) = session.hint() {
        info!("turned {:?}", location);
        hints += 1;
    }

    println!("\nsolved with {} hints:\n{}", hints, session.board());

    let trace = session.start_delivery().unwrap();
    println!("delivering over {} cells", trace.path.len());

    let step = session.config().step_interval;
    while session.is_locked() {
        for event in session.advance(step) {
            match event {
                DeliveryEvent::Step(location) => info!("at {:?}", location),
                DeliveryEvent::Pickup { location, kind } => println!("picked up {} at {:?}", kind, location),
                DeliveryEvent::Finished(outcome) => println!("{:?}", outcome),
            }
        }
    }
}
