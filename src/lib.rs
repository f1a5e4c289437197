//! S.G.A.L. - Sistema de Gestión Administrativa de Laboratorio
//!
//! API REST sobre axum + PostgreSQL: usuarios, grupos, clientes,
//! cotizaciones y solicitudes, con sesión JWT en cookie HTTP-only y
//! autorización por rol (admin/user).

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;
