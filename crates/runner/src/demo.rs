//! Sample scenarios printed by the demo binary.
//!
//! Rejections that a scenario expects are printed and the walk continues;
//! anything unexpected is returned as an error.

use anyhow::Context;
use guardrail_domain::fleet::{Car as PassengerCar, FleetVehicle, Truck, Vehicle};
use guardrail_domain::{BankAccount, Car, DomainError, GuardedEntity, MusicPlayer};
use serde_json::json;

use crate::config::Section;

pub fn run(section: Section) -> anyhow::Result<()> {
    match section {
        Section::Account => account(),
        Section::Player => player(),
        Section::Car => car(),
        Section::Fleet => fleet(),
    }
}

/// Prints the outcome of a step that is expected to be rejected.
fn expect_rejected(step: &str, result: Result<(), DomainError>) -> anyhow::Result<()> {
    match result {
        Err(err) => {
            println!("  {step}: rejected ({err})");
            Ok(())
        }
        Ok(()) => anyhow::bail!("{step} was expected to be rejected"),
    }
}

fn account() -> anyhow::Result<()> {
    println!("BankAccount");
    let mut account = BankAccount::with_balance("1234567890", "Ivanov", 0.0)?;
    println!("  opened with balance {}", account.balance());

    account.deposit(500.0)?;
    println!("  deposit(500): balance {}", account.balance());

    expect_rejected("withdraw(600)", account.withdraw(600.0))?;
    println!("  balance still {}", account.balance());

    let snapshot = serde_json::to_string(&account).context("serializing account")?;
    println!("  snapshot {snapshot}");
    Ok(())
}

fn player() -> anyhow::Result<()> {
    println!("MusicPlayer");
    let mut player = MusicPlayer::new("Sony", "Walkman", 15.0)?;
    println!("  charge {} of {}", player.current_battery(), player.battery_life());

    expect_rejected("play_music(20)", player.play_music(20.0))?;
    player.play_music(5.0)?;
    println!("  play_music(5): charge {}", player.current_battery());

    expect_rejected("recharge(10)", player.recharge(10.0))?;
    player.recharge(5.0)?;
    println!("  recharge(5): charge {}", player.current_battery());
    Ok(())
}

fn car() -> anyhow::Result<()> {
    println!("Car");
    expect_rejected(
        "Car(Ford, Mustang, 1800)",
        Car::new("Ford", "Mustang", 1800).map(|_| ()),
    )?;

    let mut car = Car::from_json(&json!({ "make": "Honda", "model": "Civic", "year": 2018 }))?;
    car.drive(150.5)?;
    println!("  drive(150.5): mileage {}", car.mileage());

    expect_rejected("drive(\"far\")", car.apply("drive", &json!("far")))?;
    expect_rejected("repaint(\"  \")", car.repaint("  "))?;
    car.repaint("Red")?;
    if let Some(color) = car.color() {
        println!("  repainted {color}");
    }
    Ok(())
}

fn fleet() -> anyhow::Result<()> {
    println!("Fleet");
    let vehicles: [FleetVehicle; 2] = [
        PassengerCar::new("Toyota", "Corolla", 2020, 4).into(),
        Truck::new("Volvo", "FH", 2018, 20.0).into(),
    ];

    for vehicle in &vehicles {
        println!("  {vehicle}");
        println!("  {}", vehicle.start_engine());
        match vehicle {
            FleetVehicle::Car(car) => println!("  {}", car.honk()),
            FleetVehicle::Truck(truck) => {
                println!("  {}", truck.load(15.0));
                println!("  {}", truck.load(25.0));
            }
        }
    }
    Ok(())
}
