use anyhow::Result;

use crate::protocol::Snapshot;

// ============================================================================
// Snapshot Encoding
// ============================================================================

#[cfg(feature = "json")]
pub fn encode_snapshot(snapshot: &Snapshot) -> Result<Vec<u8>> {
    let data = serde_json::to_vec(snapshot)?;
    Ok(data)
}

#[cfg(feature = "bincode")]
pub fn encode_snapshot(snapshot: &Snapshot) -> Result<Vec<u8>> {
    let data = bincode::encode_to_vec(snapshot, bincode::config::standard())?;
    Ok(data)
}

#[cfg(feature = "json")]
pub fn decode_snapshot(data: &[u8]) -> Result<Snapshot> {
    let snapshot = serde_json::from_slice(data)?;
    Ok(snapshot)
}

#[cfg(feature = "bincode")]
pub fn decode_snapshot(data: &[u8]) -> Result<Snapshot> {
    let snapshot = bincode::decode_from_slice(data, bincode::config::standard())?.0;
    Ok(snapshot)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{EnemyId, EnemyView, Position};

    #[test]
    fn snapshot_survives_encoding() {
        let mut snapshot = Snapshot {
            tick: 42,
            sanity_fraction: 0.5,
            ..Snapshot::default()
        };
        snapshot.enemies.push(EnemyView {
            id: EnemyId(7),
            pos: Position::new(100.0, 60.0),
            size: 13.0,
            red: Some(200),
        });

        let bytes = encode_snapshot(&snapshot).unwrap();
        let decoded = decode_snapshot(&bytes).unwrap();
        assert_eq!(decoded.tick, 42);
        assert_eq!(decoded.enemies.len(), 1);
        assert_eq!(decoded.enemies[0].red, Some(200));
    }
}
