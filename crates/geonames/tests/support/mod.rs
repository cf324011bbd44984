#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::io::{AsyncRead, ReadBuf};

/// Delivers its input as separately read pieces.
pub struct ChunkedReader {
    chunks: VecDeque<Vec<u8>>,
}

impl ChunkedReader {
    pub fn split_at(input: &[u8], offset: usize) -> Self {
        let (head, tail) = input.split_at(offset);
        Self {
            chunks: VecDeque::from([head.to_vec(), tail.to_vec()]),
        }
    }
}

impl AsyncRead for ChunkedReader {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let chunks = &mut self.get_mut().chunks;
        while chunks.front().is_some_and(Vec::is_empty) {
            chunks.pop_front();
        }
        if let Some(front) = chunks.front_mut() {
            let n = front.len().min(buf.remaining());
            buf.put_slice(&front[..n]);
            front.drain(..n);
        }
        Poll::Ready(Ok(()))
    }
}

pub fn tsv(columns: &[&str]) -> String {
    columns.join("\t")
}

pub fn lines(rows: &[String]) -> String {
    let mut out = rows.join("\n");
    out.push('\n');
    out
}

pub fn rome() -> String {
    tsv(&[
        "3169070",
        "Rome",
        "Rome",
        "Roma,Rom,Rome",
        "41.89193",
        "12.51133",
        "P",
        "PPLC",
        "IT",
        "",
        "07",
        "RM",
        "058091",
        "",
        "2318895",
        "",
        "20",
        "Europe/Rome",
        "2024-02-12",
    ])
}

pub fn italy() -> String {
    tsv(&[
        "3175395",
        "Italian Republic",
        "Italian Republic",
        "Italia,Italie,Italy",
        "42.83333",
        "12.83333",
        "A",
        "PCLI",
        "IT",
        "",
        "00",
        "",
        "",
        "",
        "60431283",
        "",
        "151",
        "Europe/Rome",
        "2024-01-17",
    ])
}

pub fn tiber() -> String {
    tsv(&[
        "3165542",
        "Tiber",
        "Tiber",
        "Tevere",
        "41.74",
        "12.2334",
        "H",
        "STM",
        "IT",
        "",
        "07",
        "",
        "",
        "",
        "",
        "",
        "-1",
        "Europe/Rome",
        "2012-01-18",
    ])
}

/// `n` distinct populated places.
pub fn villages(n: usize) -> String {
    let rows: Vec<String> = (0..n)
        .map(|i| {
            let id = (1_000 + i).to_string();
            let name = format!("Village {i}");
            tsv(&[
                &id,
                &name,
                &name,
                "",
                "45.5",
                "9.25",
                "P",
                "PPL",
                "IT",
                "",
                "09",
                "MI",
                "",
                "",
                "120",
                "",
                "130",
                "Europe/Rome",
                "2020-05-01",
            ])
        })
        .collect();
    lines(&rows)
}
