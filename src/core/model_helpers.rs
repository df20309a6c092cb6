use crate::core::{Direction, Tile, Vec2};

impl Tile {
    pub fn from_symbol(ch: char) -> Tile {
        match ch {
            '#' => Tile::Wall,
            '.' => Tile::Target,
            '$' => Tile::Box,
            '@' => Tile::Player,
            '*' => Tile::BoxOnTarget,
            '+' => Tile::PlayerOnTarget,
            _ => Tile::Floor,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Tile::Floor => ' ',
            Tile::Wall => '#',
            Tile::Target => '.',
            Tile::Box => '$',
            Tile::BoxOnTarget => '*',
            Tile::Player => '@',
            Tile::PlayerOnTarget => '+',
        }
    }

    pub fn is_box(self) -> bool {
        self == Tile::Box || self == Tile::BoxOnTarget
    }

    pub fn is_player(self) -> bool {
        self == Tile::Player || self == Tile::PlayerOnTarget
    }

    /// Floor or a bare target: the only cells a player may step on or a box may land on.
    pub fn is_open(self) -> bool {
        self == Tile::Floor || self == Tile::Target
    }

    pub fn with_player(self) -> Tile {
        if self == Tile::Target {
            Tile::PlayerOnTarget
        } else {
            Tile::Player
        }
    }

    pub fn without_player(self) -> Tile {
        if self == Tile::PlayerOnTarget {
            Tile::Target
        } else {
            Tile::Floor
        }
    }

    pub fn with_box(self) -> Tile {
        if self == Tile::Target {
            Tile::BoxOnTarget
        } else {
            Tile::Box
        }
    }

    pub fn without_box(self) -> Tile {
        if self == Tile::BoxOnTarget {
            Tile::Target
        } else {
            Tile::Floor
        }
    }
}

impl Direction {
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }

    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
