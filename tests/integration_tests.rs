// Integration tests for dts-cjs

mod integration {
    mod cli_test;
    mod end_to_end_test;
    mod rewrite_test;
}
