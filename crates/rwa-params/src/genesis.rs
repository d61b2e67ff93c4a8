//! Genesis block construction
//!
//! The genesis block is built from literal inputs and then checked against
//! the hash and merkle root pinned for the network, so building it doubles
//! as verifying the constant table. Serialization follows the Bitcoin wire
//! format: little-endian integers, compact-size lengths, minimal pushes.

use crate::consensus::Amount;
use crate::hash::{sha256d, BlockHash, Hash256};
use crate::{Error, Result};

/// First push of the genesis coinbase script (historical compact bits).
pub const GENESIS_SCRIPT_SIG_PREFIX: i64 = 486_604_799;
/// Auxiliary number pushed after the prefix.
pub const GENESIS_SCRIPT_SIG_AUX: i64 = 4;

const OP_0: u8 = 0x00;
const OP_PUSHDATA1: u8 = 0x4c;
const OP_PUSHDATA2: u8 = 0x4d;
const OP_PUSHDATA4: u8 = 0x4e;
const OP_1NEGATE: u8 = 0x4f;
const OP_1: u8 = 0x51;
const OP_CHECKSIG: u8 = 0xac;

/// Minimal script builder, just enough for coinbase and pay-to-pubkey scripts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptBuilder(Vec<u8>);

impl ScriptBuilder {
    /// Empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Push raw data with the smallest push opcode.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    /// Push an integer, using small-integer opcodes where they exist.
    pub fn push_int(self, n: i64) -> Self {
        match n {
            0 => self.push_opcode(OP_0),
            -1 => self.push_opcode(OP_1NEGATE),
            1..=16 => self.push_opcode(OP_1 + (n as u8 - 1)),
            _ => self.push_num(n),
        }
    }

    /// Push an integer as script-number data, never as an opcode.
    pub fn push_num(self, n: i64) -> Self {
        let bytes = script_num(n);
        self.push_slice(&bytes)
    }

    /// Append a bare opcode
    pub fn push_opcode(mut self, op: u8) -> Self {
        self.0.push(op);
        self
    }

    /// Finished script bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// Sign-magnitude little-endian script number encoding.
fn script_num(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

fn write_compact_size(buf: &mut Vec<u8>, n: u64) {
    if n < 0xfd {
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(0xfd);
        buf.extend_from_slice(&(n as u16).to_le_bytes());
    } else if n <= 0xffff_ffff {
        buf.push(0xfe);
        buf.extend_from_slice(&(n as u32).to_le_bytes());
    } else {
        buf.push(0xff);
        buf.extend_from_slice(&n.to_le_bytes());
    }
}

/// Length-prefixed byte vector as it appears on the wire.
pub(crate) fn serialize_bytes(data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(data.len() + 9);
    write_compact_size(&mut buf, data.len() as u64);
    buf.extend_from_slice(data);
    buf
}

/// Reference to a previous transaction output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutPoint {
    /// Previous transaction id
    pub txid: Hash256,
    /// Output index
    pub vout: u32,
}

impl OutPoint {
    /// The null outpoint spent by every coinbase
    pub const NULL: Self = Self {
        txid: Hash256::ZERO,
        vout: u32::MAX,
    };

    /// Whether this is the coinbase outpoint
    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

/// Transaction input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxIn {
    /// Spent output
    pub prevout: OutPoint,
    /// Unlocking script
    pub script_sig: Vec<u8>,
    /// Sequence number
    pub sequence: u32,
}

/// Transaction output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOut {
    /// Value in base units
    pub value: Amount,
    /// Locking script
    pub script_pubkey: Vec<u8>,
}

/// Legacy (non-witness) transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Version
    pub version: i32,
    /// Inputs
    pub inputs: Vec<TxIn>,
    /// Outputs
    pub outputs: Vec<TxOut>,
    /// Lock time
    pub lock_time: u32,
}

impl Transaction {
    /// Wire serialization
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.version.to_le_bytes());
        write_compact_size(&mut buf, self.inputs.len() as u64);
        for input in &self.inputs {
            buf.extend_from_slice(input.prevout.txid.as_bytes());
            buf.extend_from_slice(&input.prevout.vout.to_le_bytes());
            buf.extend_from_slice(&serialize_bytes(&input.script_sig));
            buf.extend_from_slice(&input.sequence.to_le_bytes());
        }
        write_compact_size(&mut buf, self.outputs.len() as u64);
        for output in &self.outputs {
            buf.extend_from_slice(&output.value.to_le_bytes());
            buf.extend_from_slice(&serialize_bytes(&output.script_pubkey));
        }
        buf.extend_from_slice(&self.lock_time.to_le_bytes());
        buf
    }

    /// Transaction id
    pub fn txid(&self) -> Hash256 {
        sha256d(&self.serialize())
    }

    /// Whether this spends only the null outpoint
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }
}

/// 80-byte block header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Block version
    pub version: i32,
    /// Previous block hash
    pub prev_blockhash: BlockHash,
    /// Merkle root of the block's transactions
    pub merkle_root: Hash256,
    /// Block time (unix seconds)
    pub time: u32,
    /// Compact difficulty target
    pub bits: u32,
    /// Nonce
    pub nonce: u32,
}

impl BlockHeader {
    /// Serialized header size
    pub const SIZE: usize = 80;

    /// Wire serialization
    pub fn serialize(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..4].copy_from_slice(&self.version.to_le_bytes());
        buf[4..36].copy_from_slice(self.prev_blockhash.as_bytes());
        buf[36..68].copy_from_slice(self.merkle_root.as_bytes());
        buf[68..72].copy_from_slice(&self.time.to_le_bytes());
        buf[72..76].copy_from_slice(&self.bits.to_le_bytes());
        buf[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        buf
    }

    /// Block hash
    pub fn block_hash(&self) -> BlockHash {
        sha256d(&self.serialize())
    }
}

/// The first block of a chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisBlock {
    /// Header
    pub header: BlockHeader,
    /// The single coinbase transaction
    pub coinbase: Transaction,
}

impl GenesisBlock {
    /// Block hash
    pub fn hash(&self) -> BlockHash {
        self.header.block_hash()
    }

    /// Merkle root (the coinbase txid)
    pub fn merkle_root(&self) -> Hash256 {
        self.header.merkle_root
    }

    /// Check the block against the literals pinned for a network.
    pub fn verify(&self, expected_hash: &BlockHash, expected_merkle_root: &Hash256) -> Result<()> {
        let hash = self.hash();
        if hash != *expected_hash {
            tracing::error!(computed = %hash, expected = %expected_hash, "genesis hash mismatch");
            return Err(Error::GenesisMismatch {
                field: "hash",
                expected: expected_hash.to_hex(),
                computed: hash.to_hex(),
            });
        }
        let merkle_root = self.merkle_root();
        if merkle_root != *expected_merkle_root {
            tracing::error!(
                computed = %merkle_root,
                expected = %expected_merkle_root,
                "genesis merkle root mismatch"
            );
            return Err(Error::GenesisMismatch {
                field: "merkle root",
                expected: expected_merkle_root.to_hex(),
                computed: merkle_root.to_hex(),
            });
        }
        Ok(())
    }
}

/// Build a genesis block from literal inputs.
///
/// The coinbase script is `push(486604799) push(num 4) push(timestamp)` and
/// its single output pays `reward` to `<output_pubkey> OP_CHECKSIG`.
pub fn build_genesis(
    timestamp: &str,
    output_pubkey: &[u8],
    time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: Amount,
) -> GenesisBlock {
    let script_sig = ScriptBuilder::new()
        .push_int(GENESIS_SCRIPT_SIG_PREFIX)
        .push_num(GENESIS_SCRIPT_SIG_AUX)
        .push_slice(timestamp.as_bytes())
        .into_bytes();
    let script_pubkey = ScriptBuilder::new()
        .push_slice(output_pubkey)
        .push_opcode(OP_CHECKSIG)
        .into_bytes();

    let coinbase = Transaction {
        version: 1,
        inputs: vec![TxIn {
            prevout: OutPoint::NULL,
            script_sig,
            sequence: u32::MAX,
        }],
        outputs: vec![TxOut {
            value: reward,
            script_pubkey,
        }],
        lock_time: 0,
    };

    let header = BlockHeader {
        version,
        prev_blockhash: BlockHash::ZERO,
        merkle_root: coinbase.txid(),
        time,
        bits,
        nonce,
    };

    GenesisBlock { header, coinbase }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consensus::COIN;

    const TIMESTAMP: &str =
        "BBC: 15/Mar/2025, US had productive talks with Putin over Ukraine war, Trump says.";
    const PUBKEY: &str = "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";

    fn genesis(nonce: u32) -> GenesisBlock {
        let pubkey = hex::decode(PUBKEY).unwrap();
        build_genesis(TIMESTAMP, &pubkey, 1_742_126_400, nonce, 0x1e0f_ffff, 1, 5000 * COIN)
    }

    #[test]
    fn test_coinbase_script_sig_layout() {
        let block = genesis(0);
        let script = &block.coinbase.inputs[0].script_sig;
        // 4-byte push of 0x1d00ffff, 1-byte push of 4, PUSHDATA1 of 82 bytes
        assert_eq!(&script[..9], &[0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04, 0x4c, 0x52]);
        assert_eq!(&script[9..], TIMESTAMP.as_bytes());
        assert!(block.coinbase.is_coinbase());
    }

    #[test]
    fn test_pay_to_pubkey_output() {
        let block = genesis(0);
        let out = &block.coinbase.outputs[0];
        assert_eq!(out.value, 500_000_000_000);
        assert_eq!(out.script_pubkey.len(), 67);
        assert_eq!(out.script_pubkey[0], 65);
        assert_eq!(*out.script_pubkey.last().unwrap(), OP_CHECKSIG);
    }

    #[test]
    fn test_pinned_main_genesis() {
        let block = genesis(10_100_045);
        let hash = BlockHash::from_hex(
            "0000099bd865de77fb9b5feec657ac4ee3c5bc3f90f440cb3caafdb6880c9cf2",
        )
        .unwrap();
        let merkle = Hash256::from_hex(
            "5694e0b86d592596c4443fa62badaf08e760fe06056503851a8985655105e4a5",
        )
        .unwrap();
        block.verify(&hash, &merkle).unwrap();
        assert!(block.header.prev_blockhash.is_zero());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(genesis(7), genesis(7));
        assert_eq!(genesis(7).hash(), genesis(7).hash());
        assert_ne!(genesis(7).hash(), genesis(8).hash());
        // Nonce is header-only
        assert_eq!(genesis(7).merkle_root(), genesis(8).merkle_root());
    }

    #[test]
    fn test_mismatch_is_reported() {
        let block = genesis(1);
        let merkle = block.merkle_root();
        let err = block.verify(&BlockHash::ZERO, &merkle).unwrap_err();
        assert!(matches!(err, Error::GenesisMismatch { field: "hash", .. }));

        let hash = block.hash();
        let err = block.verify(&hash, &Hash256::ZERO).unwrap_err();
        assert!(matches!(err, Error::GenesisMismatch { field: "merkle root", .. }));
    }

    #[test]
    fn test_push_encodings() {
        assert_eq!(ScriptBuilder::new().push_int(0).into_bytes(), vec![0x00]);
        assert_eq!(ScriptBuilder::new().push_int(4).into_bytes(), vec![0x54]);
        assert_eq!(ScriptBuilder::new().push_int(-1).into_bytes(), vec![0x4f]);
        assert_eq!(ScriptBuilder::new().push_num(4).into_bytes(), vec![0x01, 0x04]);
        assert_eq!(ScriptBuilder::new().push_num(128).into_bytes(), vec![0x02, 0x80, 0x00]);
        assert_eq!(ScriptBuilder::new().push_num(-128).into_bytes(), vec![0x02, 0x80, 0x80]);
        assert_eq!(ScriptBuilder::new().push_num(-5).into_bytes(), vec![0x01, 0x85]);

        let long = vec![0xab; 300];
        let script = ScriptBuilder::new().push_slice(&long).into_bytes();
        assert_eq!(&script[..3], &[OP_PUSHDATA2, 0x2c, 0x01]);
        assert_eq!(script.len(), 303);
    }

    #[test]
    fn test_compact_size() {
        assert_eq!(serialize_bytes(&[1, 2]), vec![2, 1, 2]);
        let big = vec![0u8; 0xfd];
        assert_eq!(&serialize_bytes(&big)[..3], &[0xfd, 0xfd, 0x00]);
    }
}
