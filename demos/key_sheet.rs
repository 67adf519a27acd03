//! Key Sheet Round Trip
//!
//! This example shows two operators sharing a key sheet.
//!
//! Key concepts:
//! - Settings parsed from the text an operator types
//! - Key sheet serialized to JSON and restored
//! - Decryption is encryption from the same starting settings
//! - Double stepping made visible through the step history
//!
//! Run with: cargo run --example key_sheet

use rotorcipher::{Machine, MachineSettings};

fn main() {
    println!("=== Key Sheet Round Trip ===\n");

    let sheet = MachineSettings::from_text("0 3 20", "1 2 3", "AZ QW ER").unwrap();
    let json = sheet.to_json().unwrap();
    println!("Shared key sheet:\n{json}\n");

    let mut sender = sheet.build().unwrap();
    let message = "Meet at the bridge at dawn.";
    let ciphertext = sender.process(message);
    println!("Plaintext:  {message}");
    println!("Ciphertext: {ciphertext}\n");

    let received = MachineSettings::from_json(&json).unwrap();
    let mut receiver = received.build().unwrap();
    println!("Decrypted:  {}\n", receiver.process(&ciphertext));

    let mut traced = Machine::builder()
        .rotors(&sheet.rotors)
        .positions(&sheet.positions)
        .ring_settings(&sheet.ring_settings)
        .record_history(true)
        .build()
        .unwrap();
    traced.process("ABCD");

    println!("Rotor windows for the first four keystrokes:");
    if let Some(history) = traced.history() {
        for step in history.steps() {
            println!(
                "  #{}: {} -> {} ({})",
                step.keystroke,
                step.from,
                step.to,
                step.kind.name()
            );
        }
    }

    println!("\n=== Example Complete ===");
}
