use std::{
    collections::{HashSet, VecDeque},
    error,
    fmt::Display,
};

use tracing::{debug, info, warn};

use crate::int_code::IntCodeComputer;

// Input meaning "no packet for you", understood by the NIC software itself.
pub const NO_PACKET: i64 = -1;
pub const NAT_SEND_ADDR: usize = 0;
const PACKET_LEN: usize = 3;

#[derive(Debug)]
pub enum Error {
    NoHost,
    ExecutionError(crate::Error, usize),
    HostHalted(usize),
    PartialPacket(usize, Vec<i64>),
    InvalidDestination(usize, i64),
    RanTooLong(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoHost => write!(f, "Network needs at least one host"),
            Error::ExecutionError(ee, addr) => write!(
                f,
                "Get error({}) in execution of host @ {}",
                ee, addr
            ),
            Error::HostHalted(addr) => write!(f, "Host @ {} halted unexpectedly", addr),
            Error::PartialPacket(addr, outputs) => write!(
                f,
                "Host @ {} sent {} values({:?}), not whole packets",
                addr,
                outputs.len(),
                outputs
            ),
            Error::InvalidDestination(addr, dest) => write!(
                f,
                "Host @ {} tries to send packet to invalid address({})",
                addr, dest
            ),
            Error::RanTooLong(ticks) => {
                write!(f, "Network is still running after {} ticks, aborting", ticks)
            }
        }
    }
}

impl error::Error for Error {}

/// One `(dest, x, y)` triple sent by the host at `src`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Packet {
    src: usize,
    dst: usize,
    payload: (i64, i64),
}

impl Display for Packet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {}: ({}, {})",
            self.src, self.dst, self.payload.0, self.payload.1
        )
    }
}

impl Packet {
    pub fn from(&self) -> usize {
        self.src
    }

    pub fn to(&self) -> usize {
        self.dst
    }

    pub fn x(&self) -> i64 {
        self.payload.0
    }

    pub fn y(&self) -> i64 {
        self.payload.1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    pub host_n: usize,
    pub monitor_addr: usize,
    pub max_ticks: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            host_n: 50,
            monitor_addr: 255,
            max_ticks: 2000,
        }
    }
}

#[derive(Debug)]
struct Host {
    addr: usize,
    computer: IntCodeComputer,
    mailbox: VecDeque<(i64, i64)>,
    idle: bool,
}

#[derive(Debug, Default)]
pub struct NetworkNAT {
    recv_pac: Option<Packet>,
    sent_ys: HashSet<i64>,
    sent_pacs: Vec<Packet>,
}

impl NetworkNAT {
    pub fn sent_pacs(&self) -> &[Packet] {
        &self.sent_pacs
    }

    pub fn recv_pac(&self) -> Option<Packet> {
        self.recv_pac
    }

    fn recv(&mut self, pac: Packet) {
        debug!(%pac, "NAT receive");
        self.recv_pac = Some(pac);
    }
}

/// Hosts running the same NIC software, stepped one after another in address
/// order. Packets are `(dest, x, y)` output triples; one addressed to the
/// monitor address is handed back to the caller instead of a host.
#[derive(Debug)]
pub struct Network {
    config: NetworkConfig,
    hosts: Vec<Host>,
    nat: NetworkNAT,
    ticks: usize,
}

impl Network {
    pub fn new(int_code: &[i64], config: NetworkConfig) -> Result<Self, Error> {
        if config.host_n == 0 {
            return Err(Error::NoHost);
        }

        let mut hosts = Vec::with_capacity(config.host_n);
        for addr in 0..config.host_n {
            let mut computer = IntCodeComputer::new(int_code);
            let res = computer
                .resume(&[addr as i64])
                .map_err(|e| Error::ExecutionError(e, addr))?;
            if res.halted {
                return Err(Error::HostHalted(addr));
            }
            if !res.outputs.is_empty() {
                warn!(addr, outputs = ?res.outputs, "host sent data while booting, dropped");
            }

            hosts.push(Host {
                addr,
                computer,
                mailbox: VecDeque::new(),
                idle: false,
            });
        }

        Ok(Self {
            config,
            hosts,
            nat: NetworkNAT::default(),
            ticks: 0,
        })
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn nat(&self) -> &NetworkNAT {
        &self.nat
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn is_idle(&self) -> bool {
        self.hosts.iter().all(|h| h.idle)
    }

    pub fn pending_packets(&self, addr: usize) -> usize {
        self.hosts.get(addr).map_or(0, |h| h.mailbox.len())
    }

    /// Give every host one turn, in address order.
    ///
    /// A host with mail receives one packet as `[x, y]`, otherwise `[-1]`.
    /// Packets it sends are queued right away, so a later host may read them
    /// in the same tick. With `skip_idle`, hosts which found no mail and sent
    /// nothing on their last turn are left alone until mail arrives.
    /// Returns the packets sent to the monitor address.
    pub fn tick(&mut self, skip_idle: bool) -> Result<Vec<Packet>, Error> {
        self.run_tick(skip_idle, false)
    }

    // With `stop_at_monitor`, the tick ends right at the first monitor packet:
    // hosts after the sender don't run and its later packets are dropped.
    fn run_tick(&mut self, skip_idle: bool, stop_at_monitor: bool) -> Result<Vec<Packet>, Error> {
        let mut monitor_pacs = Vec::new();
        for addr in 0..self.hosts.len() {
            let host = &mut self.hosts[addr];
            let inputs = match host.mailbox.pop_front() {
                Some((x, y)) => vec![x, y],
                None if skip_idle && host.idle => continue,
                None => vec![NO_PACKET],
            };

            let res = host
                .computer
                .resume(&inputs)
                .map_err(|e| Error::ExecutionError(e, host.addr))?;
            if res.halted {
                return Err(Error::HostHalted(host.addr));
            }
            host.idle = inputs.len() == 1 && res.outputs.is_empty();
            if res.outputs.len() % PACKET_LEN != 0 {
                return Err(Error::PartialPacket(addr, res.outputs));
            }

            for triple in res.outputs.chunks_exact(PACKET_LEN) {
                let pac = self.packet(addr, triple)?;
                if pac.to() != self.config.monitor_addr {
                    debug!(tick = self.ticks, %pac, "send");
                    self.hosts[pac.to()].mailbox.push_back(pac.payload);
                    continue;
                }

                debug!(tick = self.ticks, %pac, "send to monitor");
                monitor_pacs.push(pac);
                if stop_at_monitor {
                    self.ticks += 1;
                    return Ok(monitor_pacs);
                }
            }
        }
        self.ticks += 1;

        Ok(monitor_pacs)
    }

    fn packet(&self, src: usize, triple: &[i64]) -> Result<Packet, Error> {
        let dst = usize::try_from(triple[0])
            .ok()
            .filter(|&a| a == self.config.monitor_addr || a < self.hosts.len())
            .ok_or(Error::InvalidDestination(src, triple[0]))?;

        Ok(Packet {
            src,
            dst,
            payload: (triple[1], triple[2]),
        })
    }

    /// Run until some host sends a packet to the monitor address, stopping
    /// right there in the middle of the tick.
    pub fn first_packet_to_monitor(&mut self) -> Result<Packet, Error> {
        while self.ticks < self.config.max_ticks {
            if let Some(&pac) = self.run_tick(false, true)?.first() {
                return Ok(pac);
            }
        }

        Err(Error::RanTooLong(self.ticks))
    }

    /// Run with a NAT on the monitor address.
    ///
    /// The NAT keeps the last packet sent to it. Whenever every host is idle
    /// after a tick, it sends that packet to host 0. Returns the first `y` the
    /// NAT sends for the second time.
    pub fn first_repeated_nat_y(&mut self) -> Result<i64, Error> {
        while self.ticks < self.config.max_ticks {
            for pac in self.tick(true)? {
                self.nat.recv(pac);
            }

            if !self.is_idle() {
                continue;
            }
            let Some(pac) = self.nat.recv_pac else {
                continue;
            };

            if !self.nat.sent_ys.insert(pac.y()) {
                return Ok(pac.y());
            }
            info!(tick = self.ticks, %pac, "network idle, NAT sends to {}", NAT_SEND_ADDR);
            self.nat.sent_pacs.push(pac);
            self.hosts[NAT_SEND_ADDR].mailbox.push_back(pac.payload);
        }

        Err(Error::RanTooLong(self.ticks))
    }
}
