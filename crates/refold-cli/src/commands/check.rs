use crate::cli::CheckArgs;
use crate::error::Result;
use refold::core::models::structure::TargetStructure;
use tracing::debug;

pub fn run(args: CheckArgs) -> Result<()> {
    let structure = TargetStructure::parse(&args.structure)?;
    debug!(pairs = ?structure.base_pairs(), "structure parsed");

    println!("structure: {structure}");
    println!("length:    {}", structure.len());
    println!("pairs:     {}", structure.pair_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn valid_structures_pass() {
        let args = CheckArgs {
            structure: "((..((...))..))".to_string(),
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn unbalanced_structures_fail_with_a_structure_error() {
        let args = CheckArgs {
            structure: "((...".to_string(),
        };
        assert!(matches!(run(args), Err(CliError::Structure(_))));
    }
}
