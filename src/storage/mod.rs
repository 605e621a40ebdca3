//! # Adaptador de Sistema de Archivos
//! src/storage/mod.rs
//!
//! Resuelve nombres de archivo contra el directorio base configurado y
//! realiza lecturas y escrituras de archivos completos. Sin streaming ni
//! lecturas parciales.
//!
//! Un nombre que contiene segmentos `..` o separadores de ruta se rechaza
//! antes de tocar el filesystem: las rutas `/files` nunca salen del
//! directorio base.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Adaptador de archivos anclado a un directorio base
///
/// Se construye una vez en el arranque a partir de la configuración y se
/// comparte (read-only) entre todas las conexiones.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Crea un adaptador anclado al directorio indicado
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Obtiene el directorio base
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resuelve un nombre de archivo contra el directorio base
    ///
    /// Retorna `None` si el nombre es vacío, contiene separadores de ruta
    /// o segmentos `..`.
    ///
    /// # Ejemplo
    /// ```
    /// use file_server::storage::FileStore;
    ///
    /// let store = FileStore::new("/tmp/files");
    /// assert!(store.resolve("foo.txt").is_some());
    /// assert!(store.resolve("../etc/passwd").is_none());
    /// ```
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() {
            return None;
        }
        if name.contains("..") || name.contains('/') || name.contains('\\') {
            return None;
        }
        Some(self.base_dir.join(name))
    }

    /// Lee el contenido completo de un archivo bajo el directorio base
    ///
    /// Un nombre rechazado por [`resolve`](Self::resolve) se reporta como
    /// `NotFound`, igual que un archivo inexistente.
    pub fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        let path = self
            .resolve(name)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "invalid filename"))?;
        fs::read(path)
    }

    /// Escribe (crea o trunca) un archivo completo bajo el directorio base
    pub fn write(&self, name: &str, contents: &[u8]) -> io::Result<()> {
        let path = self.resolve(name).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "invalid filename")
        })?;
        fs::write(path, contents)
    }
}
