use crate::console_interface::parse_rows;

/// A level shipped with the game. The first row sets the width, so it is
/// written out to the full width of the level.
pub struct BuiltinLevel {
    pub name: &'static str,
    pub layout: &'static str,
}

impl BuiltinLevel {
    pub fn rows(&self) -> Vec<&'static str> {
        parse_rows(self.layout)
    }
}

pub const BUILTIN_LEVELS: &[BuiltinLevel] = &[
    BuiltinLevel {
        name: "classic",
        layout: r#"
 ########
##  #   #
#  $.   #
#  .$.$ #
##.$ $.##
# $.$.@ #
#   .$  #
##  #  ##
 ####### 
"#,
    },
    BuiltinLevel {
        name: "warehouse",
        layout: r#"
########
# @$  .#
# $  $ #
# .# $ #
#..#   #
########
"#,
    },
    BuiltinLevel {
        name: "corridor",
        layout: r#"
#######
#@ $ .#
#######
"#,
    },
];

pub const DEFAULT_LEVEL: &str = "classic";

pub fn find_level(name: &str) -> Option<&'static BuiltinLevel> {
    BUILTIN_LEVELS
        .iter()
        .find(|level| level.name.eq_ignore_ascii_case(name))
}
