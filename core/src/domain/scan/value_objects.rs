use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct ScanProductInput {
    pub image: Option<Bytes>,
    pub product_name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ScanMenuInput {
    pub image: Option<Bytes>,
    pub restaurant_name: Option<String>,
}
