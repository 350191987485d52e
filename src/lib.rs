//! Beyond Academics Portal - 第二课堂成果成绩单后端服务
//!
//! 基于 Actix Web 构建的课外成果申报、审核与成绩单生成系统后端。
//!
//! # 架构
//! - `cache`: 缓存层（Moka/Redis）
//! - `config`: 配置管理
//! - `domain`: 核心业务规则（积分表、学期划分、等级计算、成绩单组装）
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权中间件
//! - `models`: 数据模型定义
//! - `pdf`: 成绩单 PDF 渲染（含二维码）
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod domain;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod pdf;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
