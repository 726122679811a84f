//! Scripted bot: connects, joins, wanders around and reports what it sees.

use clap::Parser;
use log::{info, warn};
use rand::seq::SliceRandom;
use shared::{Breed, Direction, Packet, Player, MAX_DATAGRAM_SIZE, PROTOCOL_VERSION};
use std::net::SocketAddr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::net::UdpSocket;
use tokio::time::{interval, sleep_until, Instant};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to connect to
    #[arg(short = 's', long, default_value = "127.0.0.1:8080")]
    server: String,

    /// Name shown to other players
    #[arg(short, long, default_value = "bot")]
    username: String,

    /// How long to play before leaving, in seconds
    #[arg(short, long, default_value = "30")]
    duration: u64,

    /// Interval between random turns, in milliseconds
    #[arg(short, long, default_value = "1500")]
    turn_ms: u64,
}

// Get current timestamp in milliseconds
fn get_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::from_secs(0))
        .as_millis() as u64
}

async fn send(
    socket: &UdpSocket,
    packet: &Packet,
    addr: SocketAddr,
) -> Result<(), Box<dyn std::error::Error>> {
    socket.send_to(&packet.encode()?, addr).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    let server_addr = args.server.parse::<SocketAddr>()?;
    info!("Client socket bound to {}", socket.local_addr()?);

    send(
        &socket,
        &Packet::Connect {
            client_version: PROTOCOL_VERSION,
        },
        server_addr,
    )
    .await?;

    let mut buf = vec![0u8; MAX_DATAGRAM_SIZE];
    let (len, _) = socket.recv_from(&mut buf).await?;
    let client_id = match Packet::decode(&buf[..len])? {
        Packet::Connected { client_id } => client_id,
        Packet::Disconnected { reason } => {
            warn!("Server refused connection: {}", reason);
            return Ok(());
        }
        other => {
            warn!("Expected Connected but got: {:?}", other);
            return Ok(());
        }
    };
    info!("Connection accepted with client ID: {}", client_id);

    let breed = *[
        Breed::HolsteinFriesian,
        Breed::Hereford,
        Breed::Angus,
        Breed::Highland,
    ]
    .choose(&mut rand::thread_rng())
    .unwrap_or(&Breed::default());
    send(
        &socket,
        &Packet::Join {
            username: args.username.clone(),
            breed,
        },
        server_addr,
    )
    .await?;

    let deadline = Instant::now() + Duration::from_secs(args.duration);
    let mut heartbeat = interval(Duration::from_secs(1));
    let mut turns = interval(Duration::from_millis(args.turn_ms));
    let mut heading = Direction::Right;

    loop {
        tokio::select! {
            received = socket.recv_from(&mut buf) => {
                let (len, _) = received?;
                match Packet::decode(&buf[..len]) {
                    Ok(Packet::GameState { tick, players, apples, is_paused, countdown }) => {
                        let me = players.iter().find(|p| p.id() == client_id);
                        if let Some(Player::Dead(dead)) = me {
                            info!("Died on tick {} with score {}", tick, dead.score);
                            break;
                        }
                        if is_paused {
                            info!("Tick {}: paused, countdown {}", tick, countdown);
                        } else if tick % 10 == 0 {
                            info!(
                                "Tick {}: {} players, {} apples, score {}",
                                tick,
                                players.len(),
                                apples.len(),
                                me.map(Player::score).unwrap_or(0)
                            );
                        }
                    }
                    Ok(Packet::ChangedDirection { direction }) => heading = direction,
                    Ok(Packet::Paused) => info!("Game paused"),
                    Ok(Packet::Resumed) => info!("Game running"),
                    Ok(other) => info!("Received packet: {:?}", other),
                    Err(e) => warn!("Failed to deserialize packet: {}", e),
                }
            }
            _ = heartbeat.tick() => {
                send(&socket, &Packet::Heartbeat { timestamp: get_timestamp() }, server_addr).await?;
            }
            _ = turns.tick() => {
                let choices: Vec<Direction> = Direction::ALL
                    .into_iter()
                    .filter(|d| *d != heading.opposite())
                    .collect();
                if let Some(direction) = choices.choose(&mut rand::thread_rng()) {
                    send(&socket, &Packet::Move { direction: *direction }, server_addr).await?;
                }
            }
            _ = sleep_until(deadline) => {
                info!("Time is up");
                break;
            }
        }
    }

    send(&socket, &Packet::Disconnect, server_addr).await?;
    info!("Test client finished");

    Ok(())
}
