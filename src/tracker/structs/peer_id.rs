#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PeerId(pub [u8; 20]);
