//! faultline-core
//!
//! 観測パイプライン検証用のフォールト注入ハーネス。
//! 設定された確率でエラーを発生させ、Capture Gateway 経由で外部の
//! 観測バックエンドへ報告するためのコア部品を提供します。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, errors, report, user）
//! - **ports**: 抽象化レイヤー（Clock, Entropy, IdGenerator）
//! - **fault**: フォールトポリシーと遅延シミュレーション
//! - **capture**: Capture Gateway（外部観測バックエンドへの報告）
//! - **backend**: 外部 API のシミュレーション
//! - **sim**: ドメインシミュレータ（支払い、通知、天気、...）
//! - **store**: User エンティティの CRUD（in-memory / mock）
//! - **tasks**: バックグラウンドタスクレジストリ
//! - **config**: 環境変数ベースの設定

pub mod backend;
pub mod capture;
pub mod config;
pub mod domain;
pub mod fault;
pub mod ports;
pub mod sim;
pub mod store;
pub mod tasks;
