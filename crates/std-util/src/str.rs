use heck::ToSnakeCase;

pub fn snake_case(src: &str) -> String {
    src.to_snake_case()
}
