use zydro_n2k_pgn::PGNS;

use crate::cmd::ListArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_pgn_table, OutputFormat};

pub fn run(_args: ListArgs, format: OutputFormat) -> CliResult<i32> {
    print_pgn_table(&PGNS, format)?;
    Ok(SUCCESS)
}
