#[derive(Debug, Clone)]
pub enum Message {
    Launch(String),
    Magnification(f32),
    Distance(f32),
    Reset,
}
