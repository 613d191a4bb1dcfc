use changeup::{
    competition::Competition,
    config::RobotConfig,
    fs::logger,
    hardware::{
        V5,
        clock::BrainClock,
        controller::PrimaryController,
        display::{BrainHints, selector_task},
        drivetrain::{Differential, DriveGeometry},
        intake::MotorIntake,
        sensor::LimitSwitch,
        trajectory::PointShoot,
    },
    peripherals::Devices,
    selection::{SelectionHandle, Selector},
};
use log::{error, info};
use vexide::{prelude::*, smart::motor::BrakeMode};

struct Robot {
    competition: Competition<V5>,
}

impl Compete for Robot {
    async fn autonomous(&mut self) { self.competition.autonomous().await; }

    async fn driver(&mut self) { self.competition.driver().await; }
}

#[vexide::main]
async fn main(peripherals: Peripherals) {
    let config = RobotConfig::default();
    if let Err(e) = logger::init(config.log_level) {
        println!("Logger init failed: {}", e);
    }
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return;
    }

    let drivetrain = Differential::new(
        [
            Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
            Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
        ],
        [
            Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
            Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
        ],
        DriveGeometry::default(),
    );
    drivetrain.set_brakemode(BrakeMode::Brake);

    let devices: Devices<V5> = Devices {
        trajectory: PointShoot::new(drivetrain.clone()),
        drive:      drivetrain,
        intake:     MotorIntake::new([
            Motor::new(peripherals.port_5, Gearset::Green, Direction::Forward),
            Motor::new(peripherals.port_6, Gearset::Green, Direction::Reverse),
        ]),
        sensor:     LimitSwitch::new(AdiDigitalIn::new(peripherals.adi_a)),
        input:      PrimaryController::new(peripherals.primary_controller),
        clock:      BrainClock,
    };

    let selection = SelectionHandle::default();
    let mut selector = Selector::new(selection.clone(), BrainHints::new(peripherals.display));
    selector.show_banner();
    spawn(selector_task(selector)).detach();

    info!("Robot initialized");
    let robot = Robot {
        competition: Competition::new(devices, selection, config),
    };
    robot.compete().await;
}
