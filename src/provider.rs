use std::fs;
use std::io;
use std::path::PathBuf;

/// источник байтов с бинарными данными
///
/// ядру нужен только полный буфер; транспорт (локальный файл, сеть, кеш)
/// и его тайм-ауты - забота реализации источника
pub trait BlobSource
{
    fn fetch(&self) -> io::Result<Vec<u8>>;
}

/// файл на локальном диске
pub struct FileSource
{
    path: PathBuf,
}

impl FileSource
{
    pub fn new(path: impl Into<PathBuf>) -> Self
    {
        Self { path: path.into() }
    }
}

impl BlobSource for FileSource
{
    fn fetch(&self) -> io::Result<Vec<u8>>
    {
        log::trace!("reading properties data from {}", self.path.display());

        fs::read(&self.path)
    }
}

/// уже находящийся в памяти буфер
pub struct BytesSource
{
    bytes: Vec<u8>,
}

impl BytesSource
{
    pub fn new(bytes: Vec<u8>) -> Self
    {
        Self { bytes }
    }
}

impl BlobSource for BytesSource
{
    fn fetch(&self) -> io::Result<Vec<u8>>
    {
        Ok(self.bytes.clone())
    }
}
