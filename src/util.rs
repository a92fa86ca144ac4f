/// Destructures `$expr` with a refutable pattern, panicking if the shape is not the expected one.
///
/// For places where an earlier check already guarantees the shape.
macro_rules! unwrap {
    (let $pat:pat = $expr:expr) => {
        let $pat = $expr else {
            unreachable!("`{}` is not `{}`", stringify!($expr), stringify!($pat));
        };
    };
}
