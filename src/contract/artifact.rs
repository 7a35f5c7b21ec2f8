use std::fs;
use std::path::Path;

use alloy::primitives::Bytes;
use serde::Deserialize;

use crate::common::ProfilerError;

// Hardhat writes `bytecode` as a hex string, Foundry as `{ "object": ... }`
#[derive(Debug, Deserialize)]
struct ContractArtifact {
    bytecode: ArtifactBytecode,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ArtifactBytecode {
    Hex(Bytes),
    Object { object: Bytes },
}

// read the creation code out of a compiled contract artifact
pub fn load_bytecode(path: &Path) -> Result<Bytes, ProfilerError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ProfilerError::Artifact(format!("{}: {e}", path.display())))?;

    parse_bytecode(&raw)
}

pub fn parse_bytecode(raw: &str) -> Result<Bytes, ProfilerError> {
    let artifact: ContractArtifact = serde_json::from_str(raw)?;

    let bytecode = match artifact.bytecode {
        ArtifactBytecode::Hex(code) => code,
        ArtifactBytecode::Object { object } => object,
    };

    if bytecode.is_empty() {
        return Err(ProfilerError::Artifact(
            "artifact has no creation bytecode, is the contract abstract?".to_string(),
        ));
    }

    Ok(bytecode)
}
