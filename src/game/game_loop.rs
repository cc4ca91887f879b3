//! Standalone game loop for playing in the terminal.
//!
//! Presentation glue around the game core: banner, help text, command
//! parsing, and a scripted demo for non-interactive runs.

use std::error::Error;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use log::debug;

use crate::config::game::{GRID_SIZE, TREASURE_ICON};
use crate::game::state::GameState;
use crate::game::types::Direction;

const WELCOME_ART: &str = r"
  ____  _                        _               _
 |  _ \(_) __ _ _   _ _ __   ___| |__   ___  ___| |_
 | | | | |/ _` | | | | '_ \ / __| '_ \ / _ \/ __| __|
 | |_| | | (_| | |_| | | | | (__| | | |  __/ (__| |_
 |____/|_|\__, |\__,_|_| |_|\___|_| |_|\___|\___|\__|
          |___/
";

const VICTORY_ART: &str = r"
       ____  _   _  _____ _   _  _____
      / ___|| | | |/ ____| \ | |/ ____|
      \___ \| |_| | (___ |  \| | |  __
       ___) |  _  |\___ \| |\  | | |_ |
      |____/|_| |_|_____)|_| \_|\_____|
";

const HELP_TEXT: &str = "
Perintah:
- pergi <arah>  : pindah ke arah (utara/selatan/timur/barat) atau n/s/e/w
- lihat         : melihat peta sederhana
- status        : lihat nyawa dan posisi
- bantuan       : tampilkan pesan ini
- keluar        : keluar dari permainan
";

/// Print text one character at a time with a small delay per character.
fn slow_print(text: &str, delay: Duration) {
    let mut stdout = io::stdout();
    for ch in text.chars() {
        print!("{}", ch);
        let _ = stdout.flush();
        thread::sleep(delay);
    }
    println!();
}

fn print_welcome() {
    println!("{}", WELCOME_ART);
    println!("Selamat datang di Mystery Escape Room!");
    println!("Ketik \"bantuan\" untuk melihat perintah. Mainkan dalam bahasa Indonesia.");
}

fn victory_banner() -> String {
    format!("{}\nSELAMAT! Kamu berhasil keluar! {}", VICTORY_ART, TREASURE_ICON)
}

/// Run the interactive game loop until the player wins, dies, or quits.
pub fn run_game_loop() -> Result<(), Box<dyn Error>> {
    let mut rng = rand::rng();
    let mut game = GameState::new(GRID_SIZE)?;
    print_welcome();

    loop {
        if !game.is_alive() {
            println!("\nNyawamu habis. Permainan berakhir.");
            break;
        }
        if game.is_at_exit() {
            slow_print(&victory_banner(), Duration::from_millis(2));
            break;
        }

        print!("\n> ");
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break; // stdin closed
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some(&verb) = parts.first() else {
            continue;
        };
        let verb = verb.to_lowercase();

        if (verb == "pergi" || verb == "go") && parts.len() > 1 {
            report_move(&mut game, parts[1], &mut rng);
        } else if Direction::parse(&verb).is_some() {
            report_move(&mut game, &verb, &mut rng);
        } else if verb == "lihat" || verb == "map" {
            println!("Peta saat ini (N=npc, H=ghost, P=player, .=kosong):");
            println!("{}", game.render_map(false));
        } else if verb == "status" {
            println!("{}", game.status());
        } else if verb == "bantuan" || verb == "help" {
            println!("{}", HELP_TEXT);
        } else if verb == "keluar" || verb == "quit" || verb == "exit" {
            println!("Keluar dari permainan. Sampai jumpa!");
            break;
        } else {
            println!("Perintah tidak dikenal. Ketik \"bantuan\" untuk daftar perintah.");
        }
    }

    Ok(())
}

/// Apply a move and print either the cell description or the soft error.
fn report_move(game: &mut GameState, token: &str, rng: &mut impl rand::Rng) {
    match game.move_player(token, rng) {
        Ok(description) => println!("{}", description),
        Err(err) => println!("{}", err),
    }
}

/// Run a short non-interactive demo: revealed map, status, one move north.
pub fn run_demo() -> Result<(), Box<dyn Error>> {
    let mut rng = rand::rng();
    let mut game = GameState::new(GRID_SIZE)?;
    print_welcome();

    println!("Menjalankan demo otomatis...");
    println!("Peta awal (N=npc, H=ghost, P=player, .=kosong):");
    println!("{}", game.render_map(true));
    println!("\nStatus: {}", game.status());
    println!("\n{}", game.describe_current(&mut rng));
    debug!("state snapshot: {}", serde_json::to_string(&game)?);

    println!("\nMencoba bergerak utara...");
    report_move(&mut game, "utara", &mut rng);
    println!("\nStatus: {}", game.status());
    println!("\nDemo selesai.");

    Ok(())
}
