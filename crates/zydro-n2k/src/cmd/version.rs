use zydro_n2k_frame::{FrameConfig, HEADER_SIZE};
use zydro_n2k_pgn::PGNS;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("zydro-n2k {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: zydro-n2k");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("ZYDRO_N2K_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("pgns: {}", PGNS.len());
    println!("envelope_header: {HEADER_SIZE} bytes");
    println!(
        "max_payload_default: {} bytes",
        FrameConfig::default().max_payload_size
    );
    println!("features: serde={}, cli=true", cfg!(feature = "serde"));

    Ok(SUCCESS)
}
