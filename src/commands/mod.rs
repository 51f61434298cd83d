use serde_json::Value;

pub type CmdResult<T> = rebrand::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

pub mod apply;
pub mod rules;

pub fn run_json(command: crate::Commands, global: &GlobalArgs) -> (rebrand::Result<Value>, i32) {
    match command {
        crate::Commands::Apply(args) => {
            crate::output::map_cmd_result_to_json(apply::run(args, global))
        }
        crate::Commands::Rules(args) => {
            crate::output::map_cmd_result_to_json(rules::run(args, global))
        }
    }
}

pub fn run_raw(command: crate::Commands, global: &GlobalArgs) -> rebrand::Result<(String, i32)> {
    match command {
        crate::Commands::Apply(args) => apply::run_raw(args, global),
        crate::Commands::Rules(args) => rules::run_raw(args, global),
    }
}
