use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt};

/// Read a body stream to EOF and hand back the collected bytes.
///
/// The buffer starts at 1 KiB and grows as needed, so small bodies stay in
/// one allocation. Size limiting belongs to the caller; this just drains.
pub async fn drain<R: AsyncRead + Unpin>(reader: &mut R) -> std::io::Result<Bytes> {
    let mut buffer = BytesMut::with_capacity(1024);
    loop {
        let read = reader.read_buf(&mut buffer).await?;
        if read == 0 {
            break;
        }
    }
    Ok(buffer.freeze())
}
