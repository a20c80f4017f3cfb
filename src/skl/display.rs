use std::fmt;

use super::SkipList;

const EMPTY_CELL: &str = "     ";

/// One row per level from the top down, `key:value` cells aligned in columns
/// by the key's position on level 0:
///
/// ```text
///  2        2:B
///  1        2:B       4:D
///  0   1:A  2:B  3:C  4:D
/// ```
impl fmt::Display for SkipList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<i32> = self.keys().collect();
        for level in (0..self.max_levels).rev() {
            write!(f, "{:2}  ", level)?;
            let mut idx = 0;
            for node in self.level_iter(level) {
                while idx < keys.len() && node.key > keys[idx] {
                    f.write_str(EMPTY_CELL)?;
                    idx += 1;
                }
                if idx >= keys.len() {
                    break;
                }
                write!(f, "{:2}:{} ", node.key, node.value)?;
                idx += 1;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
