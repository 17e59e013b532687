use icaljson_core::build_info::BuildInfo;

pub fn run(info: &BuildInfo) {
    println!("{info}");
}
